pub mod elevenlabs_repository;
pub mod speech_repository;

pub use elevenlabs_repository::ElevenLabsRepository;
pub use speech_repository::{ProviderError, SpeechRepository};
