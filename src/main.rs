use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use percepta_speech::controllers::speech::SpeechController;
use percepta_speech::domain::speech::SpeechService;
use percepta_speech::infrastructure::config::{Config, LogFormat};
use percepta_speech::infrastructure::http::start_http_server;
use percepta_speech::infrastructure::repositories::{ElevenLabsRepository, SpeechRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Percepta speech gateway on {}:{}",
        config.host,
        config.port
    );

    // The credential is read once here; request handling never touches
    // the environment. No key means every request answers with fallback.
    let repository: Option<Arc<dyn SpeechRepository>> = match &config.elevenlabs_api_key {
        Some(api_key) => Some(Arc::new(ElevenLabsRepository::new(
            api_key.clone(),
            config.elevenlabs_voice_id.clone(),
            config.elevenlabs_model_id.clone(),
        ))),
        None => {
            tracing::warn!(
                "ElevenLabs API key not configured, all requests will be answered with the fallback signal"
            );
            None
        }
    };

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    let speech_service = Arc::new(SpeechService::new(repository));
    let speech_controller = Arc::new(SpeechController::new(speech_service));

    // Start HTTP server with all routes
    start_http_server(config, speech_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let default_filter = if config.is_development() {
        "percepta_speech=debug,tower_http=debug"
    } else {
        "percepta_speech=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
