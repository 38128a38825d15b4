use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Comment contains banned words: {}", .0.join(", "))]
    ProfanityRejected(Vec<String>),
    #[error("Sentiment model is not available")]
    ModelUnavailable,
    #[error("Schema error: {0}")]
    SchemaError(String),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}
