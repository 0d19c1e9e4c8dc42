use serde::{Deserialize, Serialize};

pub const AUDIO_MIME_TYPE: &str = "audio/mpeg";

/// Fallback text substituted when the gateway itself breaks; the original
/// text is no longer trustworthy at that point.
pub const PROCESSING_ERROR_TEXT: &str = "Error occurred during text-to-speech processing";

/// Request for POST /text-to-speech
#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechRequest {
    // An absent field deserializes to "" and is rejected like empty text
    #[serde(default)]
    pub text: String,
}

/// Result of one synthesis attempt, decided once at the gateway boundary.
///
/// Recoverable provider-side problems never become errors; they become
/// `Fallback`, so callers only ever see "audio or fallback".
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechOutcome {
    /// The provider produced audio ready for playback
    Audio { bytes: Vec<u8>, mime_type: String },
    /// No audio produced; the caller must substitute local synthesis.
    /// `reason` is logged server-side and never serialized.
    Fallback { reason: String, text: String },
}

impl SpeechOutcome {
    pub fn audio(bytes: Vec<u8>) -> Self {
        Self::Audio {
            bytes,
            mime_type: AUDIO_MIME_TYPE.to_string(),
        }
    }

    pub fn fallback(reason: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Fallback {
            reason: reason.into(),
            text: text.into(),
        }
    }

    /// Outcome produced by the outer safety net when the service fails in
    /// an unexpected way
    pub fn processing_error() -> Self {
        Self::fallback("processing error", PROCESSING_ERROR_TEXT)
    }
}

/// Wire shape of a fallback response, shared by the gateway (encode) and
/// the playback client (decode)
#[derive(Debug, Serialize, Deserialize)]
pub struct FallbackBody {
    pub fallback: bool,
    pub text: String,
}

impl FallbackBody {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            fallback: true,
            text: text.into(),
        }
    }
}
