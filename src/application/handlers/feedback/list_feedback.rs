//! ListFeedbackHandler - Query handler for the ranked collection.

use crate::domain::feedback::FeedbackEntry;

use super::submit_feedback::SharedAggregator;

pub struct ListFeedbackHandler {
    aggregator: SharedAggregator,
}

impl ListFeedbackHandler {
    pub fn new(aggregator: SharedAggregator) -> Self {
        Self { aggregator }
    }

    /// Entries ordered by importance then frequency, both descending.
    pub async fn handle(&self) -> Vec<FeedbackEntry> {
        self.aggregator.lock().await.entries().to_vec()
    }
}
