use crate::{
    domain::sentiment::{distribution::SentimentDistribution, label::SentimentLabel},
    infrastructure::datasets::table::Table,
};
use bytes::Bytes;
use serde::Serialize;

/// Column every batch upload must carry.
pub const CONTENT_COLUMN: &str = "content";
pub const CLEAN_CONTENT_COLUMN: &str = "clean_content";
pub const SENTIMENT_COLUMN: &str = "sentiment";

#[derive(Debug, Clone)]
pub struct PredictBatchRequest {
    pub file_name: String,
    pub data: Bytes,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchRow {
    pub content: String,
    pub clean_content: String,
    pub sentiment: SentimentLabel,
    pub display: &'static str,
}

/// Labeled copy of the upload: the original columns followed by
/// `clean_content` and `sentiment`, plus the label distribution.
#[derive(Debug, Clone)]
pub struct BatchPrediction {
    pub table: Table,
    pub rows: Vec<BatchRow>,
    pub distribution: SentimentDistribution,
}
