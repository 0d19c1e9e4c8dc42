//! Client side of the speech pipeline: ask the gateway for audio, play
//! it, and substitute on-device synthesis whenever no audio comes back.

pub mod client;
pub mod controller;
pub mod sink;
pub mod synthesizer;

pub use client::{GatewayError, HttpSpeechGateway, SpeechGateway, SpeechResult};
pub use controller::PlaybackController;
pub use sink::{AudioSink, CommandAudioSink, PlaybackError};
pub use synthesizer::{EspeakSynthesizer, LocalSynthesizer, SynthesisError, UtteranceSettings};
