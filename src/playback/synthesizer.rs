use async_trait::async_trait;
use tokio::process::Command;

/// Fixed utterance parameters for the hazard notification voice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtteranceSettings {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for UtteranceSettings {
    fn default() -> Self {
        Self {
            rate: 0.8,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("failed to run synthesizer: {0}")]
    Io(#[from] std::io::Error),
    #[error("synthesizer exited with {0}")]
    Failed(std::process::ExitStatus),
}

/// On-device speech synthesis, used only when the gateway cannot supply
/// audio
#[async_trait]
pub trait LocalSynthesizer: Send + Sync {
    /// Speak `text`; resolves when the utterance has finished
    async fn speak(&self, text: &str, settings: UtteranceSettings) -> Result<(), SynthesisError>;
}

// espeak-ng defaults: 175 words/minute, pitch 50 of 99, amplitude 100 of 200
const ESPEAK_BASE_WPM: f32 = 175.0;
const ESPEAK_BASE_PITCH: f32 = 50.0;
const ESPEAK_BASE_AMPLITUDE: f32 = 100.0;

/// Local synthesis by spawning `espeak-ng`
pub struct EspeakSynthesizer {
    program: String,
}

impl EspeakSynthesizer {
    pub fn new() -> Self {
        Self::with_program("espeak-ng")
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for EspeakSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Map the relative settings onto espeak-ng's absolute flags
fn espeak_args(settings: UtteranceSettings) -> [String; 6] {
    [
        "-s".to_string(),
        ((ESPEAK_BASE_WPM * settings.rate).round() as i64).to_string(),
        "-p".to_string(),
        ((ESPEAK_BASE_PITCH * settings.pitch).round().clamp(0.0, 99.0) as i64).to_string(),
        "-a".to_string(),
        ((ESPEAK_BASE_AMPLITUDE * settings.volume)
            .round()
            .clamp(0.0, 200.0) as i64)
            .to_string(),
    ]
}

#[async_trait]
impl LocalSynthesizer for EspeakSynthesizer {
    async fn speak(&self, text: &str, settings: UtteranceSettings) -> Result<(), SynthesisError> {
        let status = Command::new(&self.program)
            .args(espeak_args(settings))
            .arg(text)
            .status()
            .await?;

        if !status.success() {
            return Err(SynthesisError::Failed(status));
        }

        Ok(())
    }
}
