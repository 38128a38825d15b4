use crate::domain::sentiment::label::SentimentLabel;
use serde::{Deserialize, Serialize};

/// One row of the comment log: the raw text exactly as submitted and the
/// label predicted for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub comment: String,
    pub prediction: SentimentLabel,
}

impl CommentRecord {
    pub fn new(comment: impl Into<String>, prediction: SentimentLabel) -> Self {
        Self {
            comment: comment.into(),
            prediction,
        }
    }
}
