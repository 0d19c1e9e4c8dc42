use async_trait::async_trait;

/// Repository for speech synthesis operations.
/// Abstracts the external TTS provider so the service and the tests can
/// swap it out.
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    /// Synthesize text into a single MP3 payload
    ///
    /// # Errors
    /// Returns `ProviderError` when the provider answers with a
    /// non-success status or the call fails at the transport level. Both
    /// are recoverable; the service degrades them to a fallback outcome.
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, ProviderError>;
}

/// Failure of a single provider call
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider returned status {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
