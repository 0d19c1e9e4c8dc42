use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::config::Config;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness probe. A missing provider credential is a supported
/// deployment state, so this always answers 200; the payload says which
/// mode the gateway is running in.
pub async fn health_ready(State(config): State<Arc<Config>>) -> impl IntoResponse {
    let provider = if config.provider_configured() {
        "configured"
    } else {
        "fallback-only"
    };

    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "provider": provider
        })),
    )
}
