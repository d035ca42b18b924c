//! AdjustForDisasterHandler - reallocates a relief fund out of sector budgets.
//!
//! The fund is either given directly or estimated from severity and damage.
//! Sectors default to the current distribution with the fixed priority table.
//! When `apply` is set, the adjusted budgets become the current distribution.

use std::sync::Arc;
use tracing::{info, warn};

use super::distribute_budget::SharedJitter;
use super::events::BudgetDistributed;
use crate::domain::budget::{
    BudgetDistribution, BudgetError, DisasterAdjuster, DisasterAdjustment, DisasterSector,
};
use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope, ValidationError};
use crate::ports::{DistributionStore, EventPublisher, StoreError};

/// Command to compute a disaster relief adjustment.
#[derive(Debug, Clone, Default)]
pub struct AdjustForDisasterCommand {
    pub required_fund: Option<i64>,
    /// Used with `estimated_damage` when `required_fund` is absent.
    pub severity: Option<u8>,
    pub estimated_damage: Option<i64>,
    /// `None` uses the current distribution.
    pub sectors: Option<Vec<DisasterSector>>,
    /// Persist the adjusted budgets as the current distribution.
    pub apply: bool,
}

#[derive(Debug, Clone)]
pub struct AdjustForDisasterResult {
    pub adjustment: DisasterAdjustment,
    /// The new current distribution, when the adjustment was applied.
    pub applied: Option<BudgetDistribution>,
}

#[derive(Debug, thiserror::Error)]
pub enum AdjustForDisasterError {
    #[error(transparent)]
    InvalidInput(#[from] BudgetError),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Failed to publish event: {0}")]
    Events(#[from] DomainError),
}

/// With `apply`, the adjusted distribution is saved before the event is
/// published, so an `Events` error means it is already current.
pub struct AdjustForDisasterHandler {
    store: Arc<dyn DistributionStore>,
    event_publisher: Arc<dyn EventPublisher>,
    writer_lock: SharedJitter,
}

impl AdjustForDisasterHandler {
    /// `writer_lock` must be the lock shared with `DistributeBudgetHandler`.
    pub fn new(
        store: Arc<dyn DistributionStore>,
        event_publisher: Arc<dyn EventPublisher>,
        writer_lock: SharedJitter,
    ) -> Self {
        Self {
            store,
            event_publisher,
            writer_lock,
        }
    }

    pub async fn handle(
        &self,
        cmd: AdjustForDisasterCommand,
    ) -> Result<AdjustForDisasterResult, AdjustForDisasterError> {
        let required_fund = Self::required_fund(&cmd)?;

        // Applying rewrites the current distribution, so hold the writer lock
        // from reading the sectors until the new distribution is published.
        let _guard = if cmd.apply {
            Some(self.writer_lock.lock().await)
        } else {
            None
        };

        let sectors = match cmd.sectors {
            Some(sectors) => sectors,
            None => {
                let current = self
                    .store
                    .load_current()
                    .await?
                    .unwrap_or_else(BudgetDistribution::baseline);
                DisasterSector::from_distribution(&current)
            }
        };

        let adjustment = DisasterAdjuster::adjust(required_fund, &sectors)?;
        if !adjustment.is_fully_funded() {
            warn!(
                required_fund,
                shortfall = adjustment.shortfall,
                "disaster fund exceeds reallocatable headroom"
            );
        }

        let applied = if cmd.apply {
            Some(self.apply(&sectors, &adjustment).await?)
        } else {
            None
        };

        info!(
            required_fund,
            reduction = adjustment.totals.reduction,
            applied = applied.is_some(),
            "disaster adjustment computed"
        );

        Ok(AdjustForDisasterResult {
            adjustment,
            applied,
        })
    }

    fn required_fund(cmd: &AdjustForDisasterCommand) -> Result<i64, BudgetError> {
        if let Some(fund) = cmd.required_fund {
            return Ok(fund);
        }
        match (cmd.severity, cmd.estimated_damage) {
            (Some(severity), Some(damage)) => {
                DisasterAdjuster::estimate_required_fund(severity, damage)
            }
            _ => Err(ValidationError::empty_field("requiredFund").into()),
        }
    }

    async fn apply(
        &self,
        sectors: &[DisasterSector],
        adjustment: &DisasterAdjustment,
    ) -> Result<BudgetDistribution, AdjustForDisasterError> {
        // Keep the caller's sector order rather than priority order.
        let amounts: Vec<(String, i64)> = sectors
            .iter()
            .filter_map(|s| {
                adjustment
                    .sector(&s.name)
                    .map(|row| (row.name.clone(), row.adjusted_budget))
            })
            .collect();
        let distribution = BudgetDistribution::from_amounts(amounts)?;

        self.store.save_current(&distribution).await?;

        let envelope = EventEnvelope::from_event(&BudgetDistributed::from(&distribution))
            .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))?;
        self.event_publisher.publish(envelope).await?;

        Ok(distribution)
    }
}
