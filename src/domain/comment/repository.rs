use super::entity::CommentRecord;
use crate::domain::errors::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Adds a record after every existing one.
    async fn append(&self, record: &CommentRecord) -> Result<(), DomainError>;
    /// All records in append order; an absent log is empty.
    async fn load_all(&self) -> Result<Vec<CommentRecord>, DomainError>;
    /// Removes every record.
    async fn reset(&self) -> Result<(), DomainError>;
    /// The log serialized in its on-disk tabular form.
    async fn export(&self) -> Result<Vec<u8>, DomainError>;
}
