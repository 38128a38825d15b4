use crate::{
    domain::sentiment::label::SentimentLabel,
    infrastructure::translation::traits::TranslationStatus,
};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    static ref NON_BLANK_REGEX: Regex = Regex::new(r"\S").unwrap();
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PredictCommentRequest {
    #[validate(regex(
        path = *NON_BLANK_REGEX,
        message = "Please enter a comment before predicting"
    ))]
    pub comment: String,
}

impl PredictCommentRequest {
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictCommentOutcome {
    /// Raw input, exactly as submitted and as persisted.
    pub comment: String,
    pub clean_text: String,
    pub label: SentimentLabel,
    pub display: &'static str,
    pub satisfied: bool,
    pub translation: TranslationStatus,
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_error: Option<String>,
}
