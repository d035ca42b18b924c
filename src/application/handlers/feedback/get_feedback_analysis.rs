//! GetFeedbackAnalysisHandler - Query handler for the analysis view.

use crate::domain::feedback::{FeedbackAnalysis, FeedbackMetrics};

use super::submit_feedback::SharedAggregator;

pub struct GetFeedbackAnalysisHandler {
    aggregator: SharedAggregator,
}

impl GetFeedbackAnalysisHandler {
    pub fn new(aggregator: SharedAggregator) -> Self {
        Self { aggregator }
    }

    pub async fn handle(&self) -> FeedbackAnalysis {
        self.aggregator.lock().await.analysis()
    }

    /// Headline numbers only.
    pub async fn metrics(&self) -> FeedbackMetrics {
        self.aggregator.lock().await.metrics()
    }
}
