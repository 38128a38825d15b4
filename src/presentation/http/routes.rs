use super::{
    handlers::{batch, comments, health, predictions, samples},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Predictions
        .route("/api/v1/predictions", post(predictions::predict_comment))
        .route("/api/v1/predictions/batch", post(batch::predict_batch))
        // Comment history
        .route(
            "/api/v1/comments",
            get(comments::list_comments).delete(comments::reset_comments),
        )
        .route("/api/v1/comments/export", get(comments::export_comments))
        // Samples
        .route("/api/v1/samples/batch", get(samples::sample_batch_file))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
