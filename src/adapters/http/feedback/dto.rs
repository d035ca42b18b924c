//! HTTP DTOs for feedback endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::feedback::FeedbackEntry;

/// Request to submit feedback.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitFeedbackRequest {
    /// Topic slug, e.g. `healthcare`.
    #[serde(default)]
    pub topic: String,
    pub text: String,
    pub satisfaction: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitFeedbackResponse {
    pub entry: FeedbackEntry,
    pub merged: bool,
}

/// Query parameters for the word cloud endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct WordCloudParams {
    #[serde(default)]
    pub limit: Option<usize>,
}
