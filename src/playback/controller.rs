use super::client::{SpeechGateway, SpeechResult};
use super::sink::AudioSink;
use super::synthesizer::{LocalSynthesizer, UtteranceSettings};
use std::sync::Arc;
use tokio::sync::watch;

/// Client-side speech pipeline: ask the gateway for audio, play it, and
/// substitute local synthesis whenever no audio comes back.
///
/// State machine per `speak()` call: Idle -> Playing -> Idle, with
/// exactly one true -> false transition of the playing flag. Callers are
/// expected not to call `speak()` again while `is_playing()` is true;
/// there is no queueing and no cancellation of an in-flight request.
pub struct PlaybackController {
    gateway: Arc<dyn SpeechGateway>,
    sink: Arc<dyn AudioSink>,
    synthesizer: Option<Arc<dyn LocalSynthesizer>>,
    settings: UtteranceSettings,
    playing: watch::Sender<bool>,
}

impl PlaybackController {
    /// `synthesizer` is `None` on hosts without an on-device speech
    /// capability; fallback then ends in silence.
    pub fn new(
        gateway: Arc<dyn SpeechGateway>,
        sink: Arc<dyn AudioSink>,
        synthesizer: Option<Arc<dyn LocalSynthesizer>>,
    ) -> Self {
        let (playing, _) = watch::channel(false);
        Self {
            gateway,
            sink,
            synthesizer,
            settings: UtteranceSettings::default(),
            playing,
        }
    }

    pub fn is_playing(&self) -> bool {
        *self.playing.borrow()
    }

    /// Subscribe to playing-state changes (the UI's busy indicator)
    pub fn playing(&self) -> watch::Receiver<bool> {
        self.playing.subscribe()
    }

    /// Speak `text`: gateway audio when available, local synthesis
    /// otherwise. Failures end in silence with the playing flag reset;
    /// nothing is surfaced to the caller beyond that.
    pub async fn speak(&self, text: &str) {
        self.playing.send_replace(true);

        match self.gateway.synthesize(text).await {
            Ok(SpeechResult::Audio { bytes, .. }) => {
                if let Err(err) = self.sink.play(&bytes).await {
                    tracing::error!(error = %err, "Audio playback failed");
                }
                self.playing.send_replace(false);
            }
            Ok(SpeechResult::Fallback { text }) => {
                self.speak_locally(&text).await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Speech gateway request failed");
                self.speak_locally(text).await;
            }
        }
    }

    async fn speak_locally(&self, text: &str) {
        match &self.synthesizer {
            Some(synthesizer) => {
                if let Err(err) = synthesizer.speak(text, self.settings).await {
                    tracing::error!(error = %err, "Local speech synthesis failed");
                }
            }
            None => {
                tracing::warn!("No local synthesizer available, skipping notification");
            }
        }
        self.playing.send_replace(false);
    }
}
