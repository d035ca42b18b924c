//! Budget module - sector distribution and disaster relief adjustment.
//!
//! # Operations
//!
//! - [`BudgetNormalizer::distribute`] splits a total across weighted sectors
//!   with a controlled random perturbation.
//! - [`DisasterAdjuster::adjust`] carves a relief fund out of sector budgets
//!   in proportion to priority, bounded at 30% per sector.
//!
//! Both are pure functions; the only external input is the [`JitterSource`].

mod disaster;
mod distribution;
mod errors;
mod jitter;

pub use disaster::{
    default_priority, AdjustmentTotals, DisasterAdjuster, DisasterAdjustment, DisasterSector,
    SectorAdjustment, DEFAULT_SECTOR_PRIORITIES, UNKNOWN_SECTOR_PRIORITY,
};
pub use distribution::{
    BudgetDistribution, BudgetNormalizer, SectorAllocation, SectorWeight,
    BASELINE_SECTOR_AMOUNTS, DEFAULT_BASE_WEIGHTS, MAX_AMOUNT,
};
pub use errors::BudgetError;
pub use jitter::{
    DistributionPolicy, JitterPolicy, JitterSource, ScriptedJitter, SeededJitter, ZeroJitter,
    MIN_SECTOR_PERCENTAGE,
};
