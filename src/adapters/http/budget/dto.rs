//! HTTP DTOs for budget endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::budget::{
    default_priority, BudgetDistribution, DisasterAdjustment, DisasterSector, DistributionPolicy,
    SectorWeight,
};

/// Request to generate a new distribution.
#[derive(Debug, Clone, Deserialize)]
pub struct DistributeRequest {
    pub total: i64,
    #[serde(default)]
    pub weights: Option<Vec<SectorWeight>>,
    #[serde(default)]
    pub policy: Option<DistributionPolicy>,
}

/// A sector offered for relief; priority defaults from the sector name.
#[derive(Debug, Clone, Deserialize)]
pub struct DisasterSectorRequest {
    pub name: String,
    pub budget: i64,
    #[serde(default)]
    pub priority: Option<u32>,
}

impl From<DisasterSectorRequest> for DisasterSector {
    fn from(req: DisasterSectorRequest) -> Self {
        let priority = req.priority.unwrap_or_else(|| default_priority(&req.name));
        DisasterSector::new(req.name, req.budget, priority)
    }
}

/// Request to compute a disaster adjustment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisasterAdjustmentRequest {
    #[serde(default)]
    pub required_fund: Option<i64>,
    #[serde(default)]
    pub severity: Option<u8>,
    #[serde(default)]
    pub estimated_damage: Option<i64>,
    #[serde(default)]
    pub sectors: Option<Vec<DisasterSectorRequest>>,
    #[serde(default)]
    pub apply: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisasterAdjustmentResponse {
    #[serde(flatten)]
    pub adjustment: DisasterAdjustment,
    pub fully_funded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_distribution: Option<BudgetDistribution>,
}
