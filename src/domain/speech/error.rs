/// Error surfaced by the speech service for conditions that are not part
/// of the audio-or-fallback contract. Provider failures are not errors
/// (they degrade to a fallback outcome); this exists for genuinely
/// unexpected breakage, which the controller's safety net converts into
/// the generic fallback response.
#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
