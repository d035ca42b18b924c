//! DistributeBudgetHandler - Command handler for generating a new distribution.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use super::events::BudgetDistributed;
use crate::domain::budget::{
    BudgetDistribution, BudgetError, BudgetNormalizer, DistributionPolicy, JitterSource,
    SectorWeight,
};
use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::{DistributionStore, EventPublisher, StoreError};

/// Jitter source shared by every distribution-producing handler.
///
/// Holding the lock for compute, persist and publish serializes writers of
/// the current distribution.
pub type SharedJitter = Arc<Mutex<Box<dyn JitterSource>>>;

/// Wraps a jitter source for sharing between handlers.
pub fn shared_jitter(source: impl JitterSource + 'static) -> SharedJitter {
    let source: Box<dyn JitterSource> = Box::new(source);
    Arc::new(Mutex::new(source))
}

/// Command to distribute a total across sectors.
#[derive(Debug, Clone)]
pub struct DistributeBudgetCommand {
    pub total: i64,
    /// `None` uses the default sector weights.
    pub weights: Option<Vec<SectorWeight>>,
    pub policy: DistributionPolicy,
}

#[derive(Debug, Clone)]
pub struct DistributeBudgetResult {
    pub distribution: BudgetDistribution,
    pub event: BudgetDistributed,
}

#[derive(Debug, thiserror::Error)]
pub enum DistributeBudgetError {
    #[error(transparent)]
    InvalidInput(#[from] BudgetError),

    #[error("Failed to persist distribution: {0}")]
    Storage(#[from] StoreError),

    #[error("Failed to publish event: {0}")]
    Events(#[from] DomainError),
}

/// Handler for generating and persisting distributions.
///
/// The distribution is saved before the event is published, so an `Events`
/// error means the new distribution is already current. Retrying replaces it.
pub struct DistributeBudgetHandler {
    store: Arc<dyn DistributionStore>,
    event_publisher: Arc<dyn EventPublisher>,
    jitter: SharedJitter,
}

impl DistributeBudgetHandler {
    pub fn new(
        store: Arc<dyn DistributionStore>,
        event_publisher: Arc<dyn EventPublisher>,
        jitter: SharedJitter,
    ) -> Self {
        Self {
            store,
            event_publisher,
            jitter,
        }
    }

    pub async fn handle(
        &self,
        cmd: DistributeBudgetCommand,
    ) -> Result<DistributeBudgetResult, DistributeBudgetError> {
        let weights = cmd.weights.unwrap_or_else(SectorWeight::defaults);

        let mut jitter = self.jitter.lock().await;

        // 1. Compute
        let distribution =
            BudgetNormalizer::distribute(cmd.total, &weights, cmd.policy, &mut **jitter)?;

        // 2. Persist as the current distribution
        self.store.save_current(&distribution).await?;

        // 3. Notify other views
        let event = BudgetDistributed::from(&distribution);
        let envelope = EventEnvelope::from_event(&event)
            .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))?;
        self.event_publisher.publish(envelope).await?;

        drop(jitter);

        info!(
            distribution_id = %distribution.id,
            total = distribution.total,
            sectors = distribution.sectors.len(),
            drift = distribution.rounding_drift(),
            "budget distributed"
        );

        Ok(DistributeBudgetResult {
            distribution,
            event,
        })
    }
}
