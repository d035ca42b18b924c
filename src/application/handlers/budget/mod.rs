//! Budget command and query handlers.

mod adjust_for_disaster;
mod distribute_budget;
mod events;
mod get_current_distribution;

pub use adjust_for_disaster::{
    AdjustForDisasterCommand, AdjustForDisasterError, AdjustForDisasterHandler,
    AdjustForDisasterResult,
};
pub use distribute_budget::{
    shared_jitter, DistributeBudgetCommand, DistributeBudgetError, DistributeBudgetHandler,
    DistributeBudgetResult, SharedJitter,
};
pub use events::{BudgetDistributed, BUDGET_DISTRIBUTED};
pub use get_current_distribution::GetCurrentDistributionHandler;
