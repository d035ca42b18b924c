//! Disaster relief adjustment.
//!
//! A required relief fund is carved out of sector budgets in proportion to
//! sector priority: larger priority numbers are less critical and give up
//! more. No sector loses more than 30% of its budget.

use serde::{Deserialize, Serialize};

use super::distribution::{check_sector_names, checked_amount_sum, BudgetDistribution, MAX_AMOUNT};
use super::errors::BudgetError;
use crate::domain::foundation::{div_round_half_up, share_round_half_up, ValidationError};

/// Share of a sector budget that may be reallocated, in tenths.
const MAX_REDUCTION_TENTHS: i64 = 3;

/// Priority given to sectors missing from [`DEFAULT_SECTOR_PRIORITIES`].
pub const UNKNOWN_SECTOR_PRIORITY: u32 = 99;

/// Fixed criticality ranking (1 = most critical).
pub const DEFAULT_SECTOR_PRIORITIES: &[(&str, u32)] = &[
    ("Healthcare", 1),
    ("Education", 2),
    ("Social Welfare", 3),
    ("Environment", 4),
    ("Agriculture", 5),
    ("Infrastructure", 6),
    ("Technology", 7),
    ("Public Safety", 8),
    ("Defence", 9),
    ("Defense", 9),
    ("Administrative", 10),
];

/// Looks up a sector's priority in the fixed ranking.
pub fn default_priority(sector: &str) -> u32 {
    DEFAULT_SECTOR_PRIORITIES
        .iter()
        .find(|(name, _)| *name == sector)
        .map(|(_, priority)| *priority)
        .unwrap_or(UNKNOWN_SECTOR_PRIORITY)
}

/// A sector offered up for relief funding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisasterSector {
    pub name: String,
    pub budget: i64,
    /// Criticality rank: 1 is most critical and gives up the least.
    pub priority: u32,
}

impl DisasterSector {
    pub fn new(name: impl Into<String>, budget: i64, priority: u32) -> Self {
        Self {
            name: name.into(),
            budget,
            priority,
        }
    }

    /// Builds sectors from a distribution using [`default_priority`].
    pub fn from_distribution(distribution: &BudgetDistribution) -> Vec<DisasterSector> {
        distribution
            .sectors
            .iter()
            .map(|s| DisasterSector::new(s.sector.clone(), s.amount, default_priority(&s.sector)))
            .collect()
    }

    fn max_reduction(&self) -> i64 {
        self.budget * MAX_REDUCTION_TENTHS / 10
    }
}

/// Per-sector outcome of an adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorAdjustment {
    pub name: String,
    pub priority: u32,
    pub original_budget: i64,
    pub adjusted_budget: i64,
    pub reduction: i64,
}

/// Column sums over all sector rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentTotals {
    pub original_budget: i64,
    pub adjusted_budget: i64,
    pub reduction: i64,
}

/// Outcome of [`DisasterAdjuster::adjust`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisasterAdjustment {
    pub required_fund: i64,
    /// Rows in ascending priority order.
    pub sectors: Vec<SectorAdjustment>,
    pub totals: AdjustmentTotals,
    /// Portion of the required fund the sectors could not absorb.
    pub shortfall: i64,
}

impl DisasterAdjustment {
    pub fn is_fully_funded(&self) -> bool {
        self.shortfall == 0
    }

    pub fn sector(&self, name: &str) -> Option<&SectorAdjustment> {
        self.sectors.iter().find(|s| s.name == name)
    }
}

/// Stateless disaster relief calculator.
pub struct DisasterAdjuster;

impl DisasterAdjuster {
    /// Reallocates `required_fund` from `sectors`.
    ///
    /// Reductions start proportional to priority and capped at 30% of each
    /// budget. The rounding or capping residue is then settled walking from
    /// the least critical sector toward the most critical. Whatever cannot
    /// be absorbed is reported as `shortfall`.
    pub fn adjust(
        required_fund: i64,
        sectors: &[DisasterSector],
    ) -> Result<DisasterAdjustment, BudgetError> {
        Self::validate(required_fund, sectors)?;

        let mut ordered = sectors.to_vec();
        ordered.sort_by_key(|s| s.priority);

        let total_weight: i64 = ordered.iter().map(|s| i64::from(s.priority)).sum();
        let mut reductions: Vec<i64> = ordered
            .iter()
            .map(|s| {
                share_round_half_up(required_fund, i64::from(s.priority), total_weight)
                    .min(s.max_reduction())
            })
            .collect();

        let mut delta = required_fund - reductions.iter().sum::<i64>();
        for (sector, reduction) in ordered.iter().zip(reductions.iter_mut()).rev() {
            if delta == 0 {
                break;
            }
            if delta > 0 {
                let absorbed = delta.min(sector.max_reduction() - *reduction);
                *reduction += absorbed;
                delta -= absorbed;
            } else {
                let returned = (-delta).min(*reduction);
                *reduction -= returned;
                delta += returned;
            }
        }

        let rows: Vec<SectorAdjustment> = ordered
            .into_iter()
            .zip(reductions)
            .map(|(sector, reduction)| SectorAdjustment {
                adjusted_budget: sector.budget - reduction,
                original_budget: sector.budget,
                priority: sector.priority,
                name: sector.name,
                reduction,
            })
            .collect();

        let totals = rows.iter().fold(
            AdjustmentTotals {
                original_budget: 0,
                adjusted_budget: 0,
                reduction: 0,
            },
            |acc, row| AdjustmentTotals {
                original_budget: acc.original_budget + row.original_budget,
                adjusted_budget: acc.adjusted_budget + row.adjusted_budget,
                reduction: acc.reduction + row.reduction,
            },
        );

        Ok(DisasterAdjustment {
            required_fund,
            shortfall: required_fund - totals.reduction,
            sectors: rows,
            totals,
        })
    }

    /// Estimates relief funding from severity and damage.
    ///
    /// Coverage scales linearly from 40% of the damage at severity 0 to 80%
    /// at severity 10.
    pub fn estimate_required_fund(severity: u8, estimated_damage: i64) -> Result<i64, BudgetError> {
        if !(1..=10).contains(&severity) {
            return Err(ValidationError::out_of_range("severity", 1, 10, i64::from(severity)).into());
        }
        if !(1..=MAX_AMOUNT).contains(&estimated_damage) {
            return Err(ValidationError::out_of_range(
                "estimatedDamage",
                1,
                MAX_AMOUNT,
                estimated_damage,
            )
            .into());
        }
        let coverage_percent = 40 + 4 * i64::from(severity);
        Ok(div_round_half_up(estimated_damage * coverage_percent, 100))
    }

    fn validate(required_fund: i64, sectors: &[DisasterSector]) -> Result<(), ValidationError> {
        if !(0..=MAX_AMOUNT).contains(&required_fund) {
            return Err(ValidationError::out_of_range(
                "requiredFund",
                0,
                MAX_AMOUNT,
                required_fund,
            ));
        }
        if sectors.is_empty() {
            return Err(ValidationError::empty_field("sectors"));
        }
        check_sector_names(sectors.iter().map(|s| s.name.as_str()))?;
        for sector in sectors {
            if !(1..=MAX_AMOUNT).contains(&sector.budget) {
                return Err(ValidationError::out_of_range("budget", 1, MAX_AMOUNT, sector.budget));
            }
            if sector.priority == 0 {
                return Err(ValidationError::out_of_range("priority", 1, i64::MAX, 0));
            }
        }
        checked_amount_sum(sectors.iter().map(|s| s.budget), "budget", 1)?;
        Ok(())
    }
}
