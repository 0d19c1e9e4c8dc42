use super::speech_repository::{ProviderError, SpeechRepository};
use async_trait::async_trait;
use serde::Serialize;

const API_BASE_URL: &str = "https://api.elevenlabs.io/v1/text-to-speech";

// Voice settings are deployment constants; nothing user-facing tunes them.
const VOICE_STABILITY: f32 = 0.5;
const VOICE_SIMILARITY_BOOST: f32 = 0.75;
const VOICE_STYLE: f32 = 0.0;
const VOICE_USE_SPEAKER_BOOST: bool = true;

#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
    style: f32,
    use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: VOICE_STABILITY,
            similarity_boost: VOICE_SIMILARITY_BOOST,
            style: VOICE_STYLE,
            use_speaker_boost: VOICE_USE_SPEAKER_BOOST,
        }
    }
}

/// ElevenLabs implementation of the speech repository.
/// One synchronous call per request: no retry, no batching, platform
/// default timeout.
pub struct ElevenLabsRepository {
    http_client: reqwest::Client,
    api_key: String,
    voice_id: String,
    model_id: String,
}

impl ElevenLabsRepository {
    pub fn new(api_key: String, voice_id: String, model_id: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            voice_id,
            model_id,
        }
    }
}

#[async_trait]
impl SpeechRepository for ElevenLabsRepository {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, ProviderError> {
        let start_time = std::time::Instant::now();
        let url = format!("{}/{}", API_BASE_URL, self.voice_id);

        tracing::info!(
            voice_id = %self.voice_id,
            model_id = %self.model_id,
            text_length = text.len(),
            "Calling ElevenLabs TTS API"
        );

        let response = self
            .http_client
            .post(&url)
            .header("Accept", "audio/mpeg")
            .header("xi-api-key", &self.api_key)
            .json(&SynthesisRequest {
                text,
                model_id: &self.model_id,
                voice_settings: VoiceSettings::default(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                status = %status,
                voice_id = %self.voice_id,
                "ElevenLabs API returned an error status"
            );
            return Err(ProviderError::Status(status));
        }

        let audio = response.bytes().await?.to_vec();

        tracing::info!(
            provider = "elevenlabs",
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio.len(),
            "TTS synthesis completed"
        );

        Ok(audio)
    }
}
