//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Budget handlers
    AdjustForDisasterCommand, AdjustForDisasterHandler, DistributeBudgetCommand,
    DistributeBudgetHandler, GetCurrentDistributionHandler,
    // Dashboard handlers
    GetDashboardHandler, GetDashboardQuery,
    // Feedback handlers
    GetFeedbackAnalysisHandler, GetWordCloudHandler, ListFeedbackHandler,
    SubmitFeedbackCommand, SubmitFeedbackHandler,
};
