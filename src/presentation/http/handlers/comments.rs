use super::batch::csv_attachment;
use crate::{
    domain::comment::entity::CommentRecord,
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const HISTORY_FILE_NAME: &str = "user_comments.csv";

#[derive(Serialize)]
pub struct CommentHistory {
    pub count: usize,
    pub comments: Vec<CommentRecord>,
}

pub async fn list_comments(
    State(state): State<AppState>,
) -> Result<Json<CommentHistory>, AppError> {
    let comments = state.comment_repo.load_all().await?;
    Ok(Json(CommentHistory {
        count: comments.len(),
        comments,
    }))
}

pub async fn export_comments(State(state): State<AppState>) -> Result<Response, AppError> {
    let body = state.comment_repo.export().await?;
    Ok(csv_attachment(HISTORY_FILE_NAME, body))
}

pub async fn reset_comments(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.comment_repo.reset().await?;
    tracing::info!("Comment history reset");
    Ok(StatusCode::NO_CONTENT)
}
