//! Feedback command and query handlers.
//!
//! All handlers share one [`SharedAggregator`]; the archive only mirrors it.

mod events;
mod get_feedback_analysis;
mod get_word_cloud;
mod list_feedback;
mod restore_feedback;
mod submit_feedback;

pub use events::{FeedbackSubmitted, FEEDBACK_SUBMITTED};
pub use get_feedback_analysis::GetFeedbackAnalysisHandler;
pub use get_word_cloud::GetWordCloudHandler;
pub use list_feedback::ListFeedbackHandler;
pub use restore_feedback::restore_aggregator;
pub use submit_feedback::{
    shared_aggregator, SharedAggregator, SubmitFeedbackCommand, SubmitFeedbackError,
    SubmitFeedbackHandler, SubmitFeedbackResult,
};
