//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `BUDGET_ALLOCATION` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use budget_allocation::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod distribution;
mod error;
mod feedback;
mod server;
mod storage;

pub use distribution::DistributionConfig;
pub use error::{ConfigError, ValidationError};
pub use feedback::FeedbackConfig;
pub use server::{Environment, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a valid
/// development configuration with in-memory storage.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, middleware)
    #[serde(default)]
    pub server: ServerConfig,

    /// Persistence backend for the distribution and feedback archive
    #[serde(default)]
    pub storage: StorageConfig,

    /// Budget distribution settings
    #[serde(default)]
    pub distribution: DistributionConfig,

    /// Feedback deduplication and ranking thresholds
    #[serde(default)]
    pub feedback: FeedbackConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BUDGET_ALLOCATION` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `BUDGET_ALLOCATION__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `BUDGET_ALLOCATION__STORAGE__BACKEND=file` -> `storage.backend = file`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BUDGET_ALLOCATION")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.storage.validate()?;
        self.feedback.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
