//! Distribution configuration

use serde::Deserialize;

/// Distribution configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DistributionConfig {
    /// Seed for reproducible jitter; unset draws from OS entropy
    #[serde(default)]
    pub jitter_seed: Option<u64>,
}
