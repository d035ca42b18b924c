//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Data directory must not be empty for the file backend")]
    EmptyDataDir,

    #[error("Similarity threshold must be in (0, 1]")]
    InvalidSimilarityThreshold,

    #[error("Medium frequency threshold must be between 2 and 4")]
    InvalidMediumThreshold,

    #[error("{0} must be at least 1")]
    ZeroLimit(&'static str),
}
