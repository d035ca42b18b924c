//! Feedback aggregator error types.

use thiserror::Error;

use crate::domain::foundation::{FeedbackId, ValidationError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedbackError {
    /// Rejected before the collection is touched.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("Feedback entry not found: {0}")]
    EntryNotFound(FeedbackId),
}
