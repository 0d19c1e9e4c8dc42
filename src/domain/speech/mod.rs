pub mod dto;
pub mod error;
pub mod service;

pub use dto::{FallbackBody, SpeechOutcome, SpeechRequest, AUDIO_MIME_TYPE, PROCESSING_ERROR_TEXT};
pub use error::SpeechServiceError;
pub use service::{SpeechService, SpeechServiceApi};
