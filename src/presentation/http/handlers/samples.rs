use super::batch::csv_attachment;
use crate::presentation::http::{errors::AppError, state::AppState};
use axum::{extract::State, response::Response};

pub const SAMPLE_FILE_NAME: &str = "data_test_file.csv";

pub async fn sample_batch_file(State(state): State<AppState>) -> Result<Response, AppError> {
    let body = state
        .samples
        .load()
        .await
        .ok_or_else(|| AppError::NotFound("No sample file is available right now".into()))?;
    Ok(csv_attachment(SAMPLE_FILE_NAME, body))
}
