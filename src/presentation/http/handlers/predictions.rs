use crate::{
    application::predict_comment::dto::{PredictCommentOutcome, PredictCommentRequest},
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{Json, extract::State};

pub async fn predict_comment(
    State(state): State<AppState>,
    Json(request): Json<PredictCommentRequest>,
) -> Result<Json<PredictCommentOutcome>, AppError> {
    let outcome = state.predict_comment().execute(request).await?;
    Ok(Json(outcome))
}
