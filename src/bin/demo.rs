//! Demo client for the Percepta hazard notification: sends text to the
//! speech gateway and plays the result, substituting on-device synthesis
//! when the gateway answers with the fallback signal.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use percepta_speech::playback::{
    CommandAudioSink, EspeakSynthesizer, HttpSpeechGateway, LocalSynthesizer, PlaybackController,
};

const DEMO_NOTIFICATION: &str = "There is a hazard detected in front of you. \
    Please be careful as there is a slippery hole near you.";

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "percepta_speech=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();

    let gateway_url = std::env::var("PERCEPTA_GATEWAY_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEMO_NOTIFICATION.to_string());

    let synthesizer: Option<Arc<dyn LocalSynthesizer>> =
        Some(Arc::new(EspeakSynthesizer::new()));
    let controller = PlaybackController::new(
        Arc::new(HttpSpeechGateway::new(gateway_url)),
        Arc::new(CommandAudioSink::new()),
        synthesizer,
    );

    tracing::info!(text = %text, "Speaking notification");
    controller.speak(&text).await;
}
