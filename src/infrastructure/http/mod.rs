pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{health, speech::SpeechController};
use crate::infrastructure::config::Config;
use request_id::request_id_middleware;

/// Build the application router. Shared by the server binary and the e2e
/// tests so both exercise the same middleware stack.
pub fn build_router(config: Arc<Config>, speech_controller: Arc<SpeechController>) -> Router {
    let speech_routes = Router::new()
        .route("/text-to-speech", post(SpeechController::synthesize))
        .with_state(speech_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(config)
        .merge(speech_routes)
        .layer(middleware::from_fn(request_id_middleware))
        // The demo page is served from a different origin than the gateway
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    speech_controller: Arc<SpeechController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(config.clone(), speech_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
