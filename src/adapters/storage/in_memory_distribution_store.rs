//! In-Memory Distribution Store Adapter
//!
//! Keeps the encoded sector amounts in memory, so loads go through the same
//! rebuild path as the file store.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::file_distribution_store::{decode_amounts, encode_amounts};
use crate::domain::budget::BudgetDistribution;
use crate::ports::{DistributionStore, StoreError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryDistributionStore {
    current: Arc<RwLock<Option<Value>>>,
}

impl InMemoryDistributionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the stored distribution (useful for tests)
    pub async fn clear(&self) {
        *self.current.write().await = None;
    }
}

#[async_trait]
impl DistributionStore for InMemoryDistributionStore {
    async fn save_current(&self, distribution: &BudgetDistribution) -> Result<(), StoreError> {
        *self.current.write().await = Some(encode_amounts(distribution));
        Ok(())
    }

    async fn load_current(&self) -> Result<Option<BudgetDistribution>, StoreError> {
        match self.current.read().await.clone() {
            Some(value) => decode_amounts(value).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_save_and_load() {
        let store = InMemoryDistributionStore::new();
        assert!(store.load_current().await.unwrap().is_none());

        let baseline = BudgetDistribution::baseline();
        store.save_current(&baseline).await.unwrap();

        let loaded = store.load_current().await.unwrap().unwrap();
        assert_eq!(loaded.total, baseline.total);
        assert_eq!(loaded.sector_amounts(), baseline.sector_amounts());
    }

    #[tokio::test]
    async fn test_memory_store_supersedes_previous() {
        let store = InMemoryDistributionStore::new();
        store.save_current(&BudgetDistribution::baseline()).await.unwrap();

        let next = BudgetDistribution::from_amounts(vec![("Education", 10)]).unwrap();
        store.save_current(&next).await.unwrap();

        let loaded = store.load_current().await.unwrap().unwrap();
        assert_eq!(loaded.sectors.len(), 1);
        assert_eq!(loaded.total, 10);
    }

    #[tokio::test]
    async fn test_memory_store_clear() {
        let store = InMemoryDistributionStore::new();
        store.save_current(&BudgetDistribution::baseline()).await.unwrap();
        store.clear().await;
        assert!(store.load_current().await.unwrap().is_none());
    }
}
