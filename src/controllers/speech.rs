use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::speech::{FallbackBody, SpeechOutcome, SpeechRequest, SpeechServiceApi},
    error::{AppError, AppResult},
};

pub struct SpeechController {
    speech_service: Arc<dyn SpeechServiceApi>,
}

impl SpeechController {
    pub fn new(speech_service: Arc<dyn SpeechServiceApi>) -> Self {
        Self { speech_service }
    }

    /// POST /text-to-speech - convert text to audio, or signal fallback
    ///
    /// Past validation the response is always 200: binary audio on
    /// provider success, the fallback body otherwise. Provider failures
    /// never surface as error statuses here.
    pub async fn synthesize(
        State(controller): State<Arc<SpeechController>>,
        Json(request): Json<SpeechRequest>,
    ) -> AppResult<Response> {
        // Validate input
        if request.text.is_empty() {
            return Err(AppError::MissingText);
        }

        // Safety net: an unexpected service error still answers 200, with
        // the generic fallback text in place of the original input
        let outcome = controller
            .speech_service
            .synthesize(request.text)
            .await
            .unwrap_or_else(|err| {
                tracing::error!(error = %err, "Text-to-speech processing failed");
                SpeechOutcome::processing_error()
            });

        Ok(match outcome {
            SpeechOutcome::Audio { bytes, mime_type } => {
                let mut headers = HeaderMap::new();
                headers.insert(header::CONTENT_TYPE, mime_type.parse().unwrap());
                headers.insert(
                    header::CONTENT_LENGTH,
                    bytes.len().to_string().parse().unwrap(),
                );
                (StatusCode::OK, headers, Body::from(bytes)).into_response()
            }
            SpeechOutcome::Fallback { reason, text } => {
                tracing::warn!(reason = %reason, "Responding with fallback signal");
                (StatusCode::OK, Json(FallbackBody::new(text))).into_response()
            }
        })
    }
}
