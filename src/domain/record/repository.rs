use async_trait::async_trait;
use thiserror::Error;

use super::{Record, RecordId};

/// Failure reported by a record store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Unknown store error: {0}")]
    Unknown(String),
}

impl StoreError {
    /// Message that is safe to show to the person who submitted the form.
    /// The diagnostic detail is only ever logged.
    pub fn user_message(&self) -> &'static str {
        match self {
            StoreError::Conflict(_) => "Database error: a record with this identifier already exists.",
            StoreError::Unavailable(_) => "Database error: the database is currently unavailable. Please try again.",
            StoreError::Unknown(_) => "An error occurred while talking to the database. Please try again.",
        }
    }
}

/// Acknowledgement returned by a successful create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAck {
    pub id: RecordId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// One container of records. Every call goes straight to the backing store;
/// there is no caching and no retry.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// Inserts a new document keyed and partitioned by `record.id()`.
    async fn create(&self, record: &T) -> Result<CreateAck, StoreError>;

    /// Full scan of the container. Every call starts a fresh scan.
    async fn list_all(&self) -> Result<Vec<T>, StoreError>;

    /// Removes the document with this id. A missing document is reported as
    /// [`DeleteOutcome::NotFound`], not as an error.
    async fn delete(&self, id: &RecordId) -> Result<DeleteOutcome, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        assert_eq!(StoreError::Conflict("dup".into()).to_string(), "Conflict: dup");
        assert_eq!(StoreError::Unavailable("down".into()).to_string(), "Store unavailable: down");
        assert_eq!(StoreError::Unknown("boom".into()).to_string(), "Unknown store error: boom");
    }

    #[test]
    fn test_user_message_hides_detail() {
        let errors = [
            StoreError::Conflict("secret-conflict".into()),
            StoreError::Unavailable("secret-host:27017".into()),
            StoreError::Unknown("secret-stack".into()),
        ];
        for error in &errors {
            assert!(!error.user_message().contains("secret"));
        }
        assert!(errors[0].user_message().starts_with("Database error"));
        assert!(errors[1].user_message().starts_with("Database error"));
        assert!(!errors[2].user_message().starts_with("Database error"));
    }
}
