//! Events published when the shared distribution changes.

use serde::{Deserialize, Serialize};

use crate::domain::budget::{BudgetDistribution, DistributionPolicy};
use crate::domain::foundation::{DistributionId, DomainEvent, Timestamp};

/// Event type of [`BudgetDistributed`].
pub const BUDGET_DISTRIBUTED: &str = "budget.distributed.v1";

/// A new current distribution was persisted.
///
/// Views holding a rendered distribution should reload it on receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetDistributed {
    pub distribution_id: DistributionId,
    pub total: i64,
    pub sectors: Vec<(String, i64)>,
    pub policy: DistributionPolicy,
    pub generated_at: Timestamp,
}

impl From<&BudgetDistribution> for BudgetDistributed {
    fn from(distribution: &BudgetDistribution) -> Self {
        Self {
            distribution_id: distribution.id,
            total: distribution.total,
            sectors: distribution.sector_amounts(),
            policy: distribution.policy,
            generated_at: distribution.generated_at,
        }
    }
}

impl DomainEvent for BudgetDistributed {
    fn event_type(&self) -> &'static str {
        BUDGET_DISTRIBUTED
    }

    fn aggregate_id(&self) -> String {
        self.distribution_id.to_string()
    }

    fn occurred_at(&self) -> Timestamp {
        self.generated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::EventEnvelope;

    #[test]
    fn test_budget_distributed_envelope() {
        let distribution = BudgetDistribution::baseline();
        let event = BudgetDistributed::from(&distribution);
        let envelope = EventEnvelope::from_event(&event).unwrap();

        assert_eq!(envelope.event_type, BUDGET_DISTRIBUTED);
        assert_eq!(envelope.schema_version, 1);
        assert_eq!(envelope.aggregate_id, distribution.id.to_string());

        let decoded: BudgetDistributed = envelope.payload_as().unwrap();
        assert_eq!(decoded, event);
    }
}
