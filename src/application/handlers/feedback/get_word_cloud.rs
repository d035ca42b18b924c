//! GetWordCloudHandler - Query handler for weighted keyword terms.

use crate::domain::feedback::WordCloudTerm;

use super::submit_feedback::SharedAggregator;

pub struct GetWordCloudHandler {
    aggregator: SharedAggregator,
}

impl GetWordCloudHandler {
    pub fn new(aggregator: SharedAggregator) -> Self {
        Self { aggregator }
    }

    /// `limit` falls back to the policy's word-cloud limit.
    pub async fn handle(&self, limit: Option<usize>) -> Vec<WordCloudTerm> {
        let aggregator = self.aggregator.lock().await;
        let limit = limit.unwrap_or(aggregator.policy().word_cloud_limit);
        aggregator.word_cloud(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::feedback::shared_aggregator;
    use crate::domain::feedback::{FeedbackAggregator, FeedbackPolicy};

    fn aggregator(policy: FeedbackPolicy) -> FeedbackAggregator {
        let mut aggregator = FeedbackAggregator::new(policy);
        aggregator
            .submit("infrastructure", "bridge repairs delayed again, bridge unsafe", 2)
            .unwrap();
        aggregator
            .submit("education", "school library needs books", 6)
            .unwrap();
        aggregator
    }

    #[tokio::test]
    async fn uses_policy_limit_by_default() {
        let policy = FeedbackPolicy {
            word_cloud_limit: 2,
            ..FeedbackPolicy::default()
        };
        let handler = GetWordCloudHandler::new(shared_aggregator(aggregator(policy)));

        let cloud = handler.handle(None).await;

        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud[0].word, "bridge");
        assert_eq!(cloud[0].count, 2);
    }

    #[tokio::test]
    async fn explicit_limit_overrides_policy() {
        let handler =
            GetWordCloudHandler::new(shared_aggregator(aggregator(FeedbackPolicy::default())));

        assert_eq!(handler.handle(Some(1)).await.len(), 1);
        assert!(handler.handle(Some(0)).await.is_empty());
    }
}
