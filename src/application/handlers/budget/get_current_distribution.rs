//! GetCurrentDistributionHandler - Query handler for the shared distribution.

use std::sync::Arc;

use crate::domain::budget::BudgetDistribution;
use crate::ports::{DistributionStore, StoreError};

/// Returns the persisted distribution, or the baseline when none exists.
pub struct GetCurrentDistributionHandler {
    store: Arc<dyn DistributionStore>,
}

impl GetCurrentDistributionHandler {
    pub fn new(store: Arc<dyn DistributionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<BudgetDistribution, StoreError> {
        Ok(self
            .store
            .load_current()
            .await?
            .unwrap_or_else(BudgetDistribution::baseline))
    }
}
