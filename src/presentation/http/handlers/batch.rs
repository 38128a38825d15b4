use crate::{
    application::predict_batch::dto::{BatchRow, PredictBatchRequest},
    domain::sentiment::distribution::SentimentDistribution,
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Multipart, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

pub const RESULT_FILE_NAME: &str = "ket_qua_du_doan.csv";

#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Debug, Deserialize)]
pub struct BatchQuery {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct BatchResponse {
    file_name: String,
    columns: Vec<String>,
    row_count: usize,
    rows: Vec<BatchRow>,
    distribution: SentimentDistribution,
}

pub async fn predict_batch(
    State(state): State<AppState>,
    Query(query): Query<BatchQuery>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let file_name = field
                .file_name()
                .map(str::to_string)
                .ok_or_else(|| AppError::BadRequest("The file field needs a file name".into()))?;
            let data = field.bytes().await?;
            upload = Some(PredictBatchRequest { file_name, data });
        }
    }

    let request = upload.ok_or_else(|| AppError::BadRequest("Missing file field".into()))?;
    let file_name = request.file_name.clone();
    let prediction = state.predict_batch().execute(request).await?;

    match query.format {
        OutputFormat::Json => Ok(Json(BatchResponse {
            file_name,
            columns: prediction.table.headers.clone(),
            row_count: prediction.rows.len(),
            rows: prediction.rows,
            distribution: prediction.distribution,
        })
        .into_response()),
        OutputFormat::Csv => {
            let body = prediction.table.to_csv()?;
            Ok(csv_attachment(RESULT_FILE_NAME, body))
        }
    }
}

pub fn csv_attachment(file_name: &str, body: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        body,
    )
        .into_response()
}
