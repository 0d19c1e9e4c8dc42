use crate::domain::speech::FallbackBody;
use async_trait::async_trait;

/// Gateway response, decoded exactly once into a typed result
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechResult {
    /// The gateway returned playable audio
    Audio { bytes: Vec<u8>, mime_type: String },
    /// The gateway signalled that local synthesis must be substituted
    Fallback { text: String },
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("unrecognized gateway response: {0}")]
    Decode(String),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Client side of the gateway HTTP contract
#[async_trait]
pub trait SpeechGateway: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<SpeechResult, GatewayError>;
}

pub struct HttpSpeechGateway {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpSpeechGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl SpeechGateway for HttpSpeechGateway {
    async fn synthesize(&self, text: &str) -> Result<SpeechResult, GatewayError> {
        let response = self
            .http_client
            .post(format!("{}/text-to-speech", self.base_url))
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status));
        }

        let mime_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if mime_type.contains("audio") {
            let bytes = response.bytes().await?.to_vec();
            return Ok(SpeechResult::Audio { bytes, mime_type });
        }

        let body: FallbackBody = response
            .json()
            .await
            .map_err(|err| GatewayError::Decode(err.to_string()))?;

        Ok(SpeechResult::Fallback { text: body.text })
    }
}
