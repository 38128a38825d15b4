use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    model: &'static str,
    banned_words: usize,
    version: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let model_status = if state.classifier.is_some() {
        "loaded"
    } else {
        tracing::error!("Health check failed: sentiment model not loaded");
        "missing"
    };

    let status = if model_status == "loaded" {
        "healthy"
    } else {
        "unhealthy"
    };

    let response = HealthResponse {
        status,
        model: model_status,
        banned_words: state.profanity.len(),
        version: env!("CARGO_PKG_VERSION"),
    };

    let code = if status == "healthy" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(response))
}
