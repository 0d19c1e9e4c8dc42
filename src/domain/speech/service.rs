use super::dto::SpeechOutcome;
use super::error::SpeechServiceError;
use crate::infrastructure::repositories::SpeechRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Fallback reason recorded when no provider credential is configured
const NOT_CONFIGURED: &str = "not configured";

pub struct SpeechService {
    repository: Option<Arc<dyn SpeechRepository>>,
}

impl SpeechService {
    /// `repository` is `None` when the deployment carries no provider
    /// credential; every request then degrades to fallback without any
    /// provider traffic.
    pub fn new(repository: Option<Arc<dyn SpeechRepository>>) -> Self {
        Self { repository }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Convert text into audio via the configured provider.
    ///
    /// Missing credential, provider error status and transport failures
    /// all resolve to `Ok(SpeechOutcome::Fallback)`; `Err` is reserved
    /// for unexpected breakage outside the provider exchange.
    async fn synthesize(&self, text: String) -> Result<SpeechOutcome, SpeechServiceError>;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn synthesize(&self, text: String) -> Result<SpeechOutcome, SpeechServiceError> {
        let Some(repository) = &self.repository else {
            tracing::warn!(
                "ElevenLabs API key not configured, requesting fallback speech synthesis"
            );
            return Ok(SpeechOutcome::fallback(NOT_CONFIGURED, text));
        };

        tracing::info!(text_length = text.len(), "Speech synthesis request");

        match repository.synthesize(&text).await {
            Ok(bytes) => {
                tracing::debug!(audio_size_bytes = bytes.len(), "Provider returned audio");
                Ok(SpeechOutcome::audio(bytes))
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    "ElevenLabs synthesis failed, requesting fallback"
                );
                Ok(SpeechOutcome::fallback(err.to_string(), text))
            }
        }
    }
}
