//! GetDashboardHandler - Query handler for rendering a dashboard view.
//!
//! Both views read the same current distribution, so a distribution written
//! through one view is what the other renders next.

use std::sync::Arc;

use crate::domain::budget::BudgetDistribution;
use crate::domain::dashboard::{DashboardSnapshot, DashboardView};
use crate::ports::{DistributionStore, StoreError};

/// Query for one dashboard view.
#[derive(Debug, Clone, Copy)]
pub struct GetDashboardQuery {
    pub view: DashboardView,
}

pub type GetDashboardResult = DashboardSnapshot;

pub struct GetDashboardHandler {
    store: Arc<dyn DistributionStore>,
}

impl GetDashboardHandler {
    pub fn new(store: Arc<dyn DistributionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetDashboardQuery) -> Result<GetDashboardResult, StoreError> {
        let distribution = self
            .store
            .load_current()
            .await?
            .unwrap_or_else(BudgetDistribution::baseline);
        Ok(DashboardSnapshot::build(query.view, &distribution))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryDistributionStore;
    use async_trait::async_trait;

    struct BrokenStore;

    #[async_trait]
    impl DistributionStore for BrokenStore {
        async fn save_current(&self, _: &BudgetDistribution) -> Result<(), StoreError> {
            Ok(())
        }

        async fn load_current(&self) -> Result<Option<BudgetDistribution>, StoreError> {
            Err(StoreError::Corrupt("truncated".to_string()))
        }
    }

    #[tokio::test]
    async fn renders_baseline_before_first_distribution() {
        let handler = GetDashboardHandler::new(Arc::new(InMemoryDistributionStore::new()));
        let snapshot = handler
            .handle(GetDashboardQuery {
                view: DashboardView::Public,
            })
            .await
            .unwrap();

        assert_eq!(snapshot.view, DashboardView::Public);
        assert_eq!(snapshot.total, 225_000);
        assert_eq!(snapshot.facts.top_sector.as_deref(), Some("Healthcare"));
    }

    #[tokio::test]
    async fn both_views_show_the_same_amounts() {
        let store = Arc::new(InMemoryDistributionStore::new());
        let stored =
            BudgetDistribution::from_amounts(vec![("Education", 600), ("Technology", 400)]).unwrap();
        store.save_current(&stored).await.unwrap();
        let handler = GetDashboardHandler::new(store);

        let government = handler
            .handle(GetDashboardQuery {
                view: DashboardView::Government,
            })
            .await
            .unwrap();
        let public = handler
            .handle(GetDashboardQuery {
                view: DashboardView::Public,
            })
            .await
            .unwrap();

        assert_eq!(government.sectors, public.sectors);
        assert_eq!(government.facts, public.facts);
        assert_eq!(public.facts.social_share.value(), 60.0);
    }

    #[tokio::test]
    async fn propagates_store_failure() {
        let handler = GetDashboardHandler::new(Arc::new(BrokenStore));
        let result = handler
            .handle(GetDashboardQuery {
                view: DashboardView::Government,
            })
            .await;

        assert!(matches!(result, Err(StoreError::Corrupt(_))));
    }
}
