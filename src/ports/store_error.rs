//! Errors shared by the persistence ports.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur while reading or writing persisted state
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize: {0}")]
    Serialization(String),

    /// The stored document parsed but does not describe valid state.
    #[error("Stored data is corrupt: {0}")]
    Corrupt(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}
