//! Budget normalizer error types.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors raised by the distribution and disaster-adjustment calculations.
///
/// Every variant is returned before any output is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BudgetError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
}

impl BudgetError {
    /// Returns the underlying validation failure.
    pub fn validation(&self) -> &ValidationError {
        match self {
            BudgetError::InvalidInput(err) => err,
        }
    }
}
