use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::budget::BudgetDistribution;
use crate::domain::foundation::{round_to, Percentage, Timestamp, ValidationError};

/// Sectors counted towards the social share.
pub const SOCIAL_SECTORS: &[&str] = &["Education", "Healthcare", "Social Welfare"];

/// Sectors counted towards the economic share.
pub const ECONOMIC_SECTORS: &[&str] = &["Agriculture", "Infrastructure", "Technology"];

/// Population divisor for the per-capita figure, in the same unit as amounts.
pub const POPULATION_UNITS: f64 = 140.0;

/// Which audience a dashboard is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardView {
    Government,
    Public,
}

impl DashboardView {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardView::Government => "government",
            DashboardView::Public => "public",
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DashboardView {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "government" => Ok(DashboardView::Government),
            "public" => Ok(DashboardView::Public),
            _ => Err(ValidationError::invalid_format(
                "view",
                format!("unknown dashboard '{}'", s),
            )),
        }
    }
}

/// One sector card on a dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorCard {
    pub sector: String,
    pub amount: i64,
    /// Share of the dashboard total
    pub percentage: Percentage,
}

/// The fact cards under the charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyBudgetFacts {
    /// Largest allocation; first listed wins ties
    pub top_sector: Option<String>,
    pub social_share: Percentage,
    pub economic_share: Percentage,
    /// `total / 140`, 2 decimals
    pub per_capita: f64,
}

/// Everything a dashboard renders for one distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub view: DashboardView,
    pub total: i64,
    pub sectors: Vec<SectorCard>,
    pub facts: KeyBudgetFacts,
    pub generated_at: Timestamp,
}

impl DashboardSnapshot {
    /// Builds the dashboard for `view` from the shared distribution.
    ///
    /// Percentages are recomputed from the distribution total so every view
    /// shows the same figures for the same stored amounts.
    pub fn build(view: DashboardView, distribution: &BudgetDistribution) -> Self {
        let total = distribution.total;
        let sectors = distribution
            .sectors
            .iter()
            .map(|s| SectorCard {
                sector: s.sector.clone(),
                amount: s.amount,
                percentage: Percentage::of(s.amount as f64, total as f64),
            })
            .collect::<Vec<_>>();

        let facts = KeyBudgetFacts {
            top_sector: top_sector(&sectors),
            social_share: share_of(&sectors, SOCIAL_SECTORS, total),
            economic_share: share_of(&sectors, ECONOMIC_SECTORS, total),
            per_capita: round_to(total as f64 / POPULATION_UNITS, 2),
        };

        Self {
            view,
            total,
            sectors,
            facts,
            generated_at: Timestamp::now(),
        }
    }
}

fn top_sector(cards: &[SectorCard]) -> Option<String> {
    cards
        .iter()
        .fold(None::<&SectorCard>, |best, card| match best {
            Some(b) if b.amount >= card.amount => Some(b),
            _ => Some(card),
        })
        .map(|card| card.sector.clone())
}

fn share_of(cards: &[SectorCard], group: &[&str], total: i64) -> Percentage {
    let amount: i64 = cards
        .iter()
        .filter(|card| group.contains(&card.sector.as_str()))
        .map(|card| card.amount)
        .sum();
    Percentage::of(amount as f64, total as f64)
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;
