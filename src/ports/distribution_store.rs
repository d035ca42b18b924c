//! DistributionStore port - the single "current" budget distribution.
//!
//! Every dashboard reads the same stored distribution, so saving a new one
//! supersedes the previous snapshot for all views.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::budget::BudgetDistribution;

/// Port for persisting the current distribution.
///
/// Only per-sector amounts are guaranteed to survive a round trip. Loaders
/// rebuild the total and percentages from the stored amounts.
#[async_trait]
pub trait DistributionStore: Send + Sync {
    /// Replaces the current distribution.
    async fn save_current(&self, distribution: &BudgetDistribution) -> Result<(), StoreError>;

    /// Loads the current distribution, or `None` if nothing has been saved.
    async fn load_current(&self) -> Result<Option<BudgetDistribution>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn DistributionStore) {}
}
