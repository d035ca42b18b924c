//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod budget;
pub mod dashboard;
pub mod feedback;

pub use budget::{
    shared_jitter, AdjustForDisasterCommand, AdjustForDisasterError, AdjustForDisasterHandler,
    AdjustForDisasterResult, BudgetDistributed, DistributeBudgetCommand, DistributeBudgetError,
    DistributeBudgetHandler, DistributeBudgetResult, GetCurrentDistributionHandler, SharedJitter,
    BUDGET_DISTRIBUTED,
};
pub use dashboard::{GetDashboardHandler, GetDashboardQuery, GetDashboardResult};
pub use feedback::{
    restore_aggregator, shared_aggregator, FeedbackSubmitted, GetFeedbackAnalysisHandler,
    GetWordCloudHandler, ListFeedbackHandler, SharedAggregator, SubmitFeedbackCommand,
    SubmitFeedbackError, SubmitFeedbackHandler, SubmitFeedbackResult, FEEDBACK_SUBMITTED,
};
