//! Budget distribution - splits a total across weighted sectors.
//!
//! Base weights are perturbed by a [`JitterPolicy`], floored, renormalized to
//! 100% and converted to whole-unit amounts.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::errors::BudgetError;
use super::jitter::{DistributionPolicy, JitterPolicy, JitterSource};
use crate::domain::foundation::{DistributionId, Percentage, Timestamp, ValidationError};

/// Largest accepted monetary amount. Also bounds the sum of sector amounts.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

/// Base weights used when a caller provides none.
pub const DEFAULT_BASE_WEIGHTS: &[(&str, f64)] = &[
    ("Healthcare", 22.0),
    ("Infrastructure", 20.0),
    ("Education", 18.0),
    ("Defence", 15.0),
    ("Agriculture", 13.0),
    ("Social Welfare", 12.0),
];

/// Amounts served before any distribution has been generated.
pub const BASELINE_SECTOR_AMOUNTS: &[(&str, i64)] = &[
    ("Healthcare", 50_000),
    ("Infrastructure", 45_000),
    ("Education", 40_000),
    ("Defense", 35_000),
    ("Agriculture", 30_000),
    ("Social Welfare", 25_000),
];

/// A sector's nominal share before perturbation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorWeight {
    pub sector: String,
    pub base_percentage: f64,
}

impl SectorWeight {
    pub fn new(sector: impl Into<String>, base_percentage: f64) -> Self {
        Self {
            sector: sector.into(),
            base_percentage,
        }
    }

    /// Returns [`DEFAULT_BASE_WEIGHTS`] as owned weights.
    pub fn defaults() -> Vec<SectorWeight> {
        DEFAULT_BASE_WEIGHTS
            .iter()
            .map(|(sector, pct)| SectorWeight::new(*sector, *pct))
            .collect()
    }
}

/// A sector's share of the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorAllocation {
    pub sector: String,
    pub amount: i64,
    pub percentage: Percentage,
}

/// The result of splitting a total across sectors.
///
/// Amounts are rounded independently, so their sum may drift from `total`
/// by at most one unit per sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetDistribution {
    pub id: DistributionId,
    pub total: i64,
    pub sectors: Vec<SectorAllocation>,
    pub policy: DistributionPolicy,
    pub generated_at: Timestamp,
}

impl BudgetDistribution {
    /// Rebuilds a distribution from stored per-sector amounts.
    ///
    /// The total is the sum of the amounts and percentages are recomputed
    /// from it.
    pub fn from_amounts<I, S>(amounts: I) -> Result<Self, BudgetError>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let amounts: Vec<(String, i64)> =
            amounts.into_iter().map(|(name, amount)| (name.into(), amount)).collect();

        if amounts.is_empty() {
            return Err(ValidationError::empty_field("sectors").into());
        }
        check_sector_names(amounts.iter().map(|(name, _)| name.as_str()))?;
        if let Some((_, amount)) = amounts
            .iter()
            .find(|(_, amount)| !(0..=MAX_AMOUNT).contains(amount))
        {
            return Err(
                ValidationError::out_of_range("amount", 0, MAX_AMOUNT, *amount).into(),
            );
        }

        let total = checked_amount_sum(amounts.iter().map(|(_, amount)| *amount), "total", 0)?;
        let sectors = amounts
            .into_iter()
            .map(|(sector, amount)| SectorAllocation {
                percentage: Percentage::of(amount as f64, total as f64),
                sector,
                amount,
            })
            .collect();

        Ok(Self {
            id: DistributionId::new(),
            total,
            sectors,
            policy: DistributionPolicy::Manual,
            generated_at: Timestamp::now(),
        })
    }

    /// The distribution shown before anything has been generated.
    pub fn baseline() -> Self {
        let total = BASELINE_SECTOR_AMOUNTS.iter().map(|(_, amount)| amount).sum::<i64>();
        let sectors = BASELINE_SECTOR_AMOUNTS
            .iter()
            .map(|(sector, amount)| SectorAllocation {
                sector: (*sector).to_string(),
                amount: *amount,
                percentage: Percentage::of(*amount as f64, total as f64),
            })
            .collect();

        Self {
            id: DistributionId::new(),
            total,
            sectors,
            policy: DistributionPolicy::Manual,
            generated_at: Timestamp::now(),
        }
    }

    /// Sum of the rounded sector amounts.
    pub fn allocated_total(&self) -> i64 {
        self.sectors.iter().map(|s| s.amount).sum()
    }

    /// `allocated_total() - total`.
    pub fn rounding_drift(&self) -> i64 {
        self.allocated_total() - self.total
    }

    /// Sum of the sector percentages.
    pub fn percentage_sum(&self) -> f64 {
        self.sectors.iter().map(|s| s.percentage.value()).sum()
    }

    pub fn sector(&self, name: &str) -> Option<&SectorAllocation> {
        self.sectors.iter().find(|s| s.sector == name)
    }

    /// Sector names paired with their amounts, in distribution order.
    pub fn sector_amounts(&self) -> Vec<(String, i64)> {
        self.sectors
            .iter()
            .map(|s| (s.sector.clone(), s.amount))
            .collect()
    }
}

/// Stateless budget normalizer.
pub struct BudgetNormalizer;

impl BudgetNormalizer {
    /// Splits `total` across `weights`.
    ///
    /// Each base percentage is perturbed through `policy` using `source`,
    /// then the perturbed values are normalized to sum to 100. Percentages
    /// are reported to 2 decimals; amounts are rounded from the unrounded
    /// normalized share so each is within half a unit of its exact value.
    pub fn distribute(
        total: i64,
        weights: &[SectorWeight],
        policy: DistributionPolicy,
        source: &mut dyn JitterSource,
    ) -> Result<BudgetDistribution, BudgetError> {
        if !(1..=MAX_AMOUNT).contains(&total) {
            return Err(ValidationError::out_of_range("total", 1, MAX_AMOUNT, total).into());
        }
        if weights.is_empty() {
            return Err(ValidationError::empty_field("weights").into());
        }
        check_sector_names(weights.iter().map(|w| w.sector.as_str()))?;
        for weight in weights {
            if !weight.base_percentage.is_finite() || weight.base_percentage <= 0.0 {
                return Err(ValidationError::invalid_format(
                    "basePercentage",
                    format!(
                        "{} must be a positive number, got {}",
                        weight.sector, weight.base_percentage
                    ),
                )
                .into());
            }
        }
        let jitter = policy.jitter().ok_or_else(|| {
            ValidationError::invalid_format("policy", "manual distributions cannot be generated")
        })?;

        let perturbed = Self::perturb_all(weights, &jitter, source);
        let perturbed_total: f64 = perturbed.iter().sum();

        let sectors = weights
            .iter()
            .zip(perturbed)
            .map(|(weight, value)| {
                let share = value / perturbed_total;
                SectorAllocation {
                    sector: weight.sector.clone(),
                    amount: (total as f64 * share).round() as i64,
                    percentage: Percentage::new(share * 100.0),
                }
            })
            .collect();

        Ok(BudgetDistribution {
            id: DistributionId::new(),
            total,
            sectors,
            policy,
            generated_at: Timestamp::now(),
        })
    }

    fn perturb_all(
        weights: &[SectorWeight],
        jitter: &JitterPolicy,
        source: &mut dyn JitterSource,
    ) -> Vec<f64> {
        weights
            .iter()
            .map(|w| jitter.perturb(w.base_percentage, source))
            .collect()
    }
}

/// Sums amounts, rejecting a sum above [`MAX_AMOUNT`] as `field`.
pub(crate) fn checked_amount_sum(
    amounts: impl IntoIterator<Item = i64>,
    field: &str,
    min: i64,
) -> Result<i64, ValidationError> {
    let sum = amounts
        .into_iter()
        .try_fold(0_i64, |acc, amount| acc.checked_add(amount))
        .filter(|sum| *sum <= MAX_AMOUNT);
    sum.ok_or_else(|| ValidationError::out_of_range(field, min, MAX_AMOUNT, i64::MAX))
}

/// Rejects empty or repeated sector names.
pub(crate) fn check_sector_names<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("sector"));
        }
        if !seen.insert(name) {
            return Err(ValidationError::duplicate("sector", name));
        }
    }
    Ok(())
}
