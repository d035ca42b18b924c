//! SubmitFeedbackHandler - Command handler for ingesting one submission.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::events::FeedbackSubmitted;
use crate::domain::feedback::{FeedbackAggregator, FeedbackEntry, FeedbackError};
use crate::domain::foundation::EventEnvelope;
use crate::ports::{EventPublisher, FeedbackArchive};

/// The live feedback collection shared by every feedback handler.
///
/// The lock is held across normalize, dedup, merge and re-rank so concurrent
/// submissions never lose an update.
pub type SharedAggregator = Arc<Mutex<FeedbackAggregator>>;

pub fn shared_aggregator(aggregator: FeedbackAggregator) -> SharedAggregator {
    Arc::new(Mutex::new(aggregator))
}

/// Command to submit feedback.
#[derive(Debug, Clone)]
pub struct SubmitFeedbackCommand {
    /// Topic slug, e.g. `social-welfare`.
    pub topic: String,
    pub text: String,
    pub satisfaction: i64,
}

#[derive(Debug, Clone)]
pub struct SubmitFeedbackResult {
    pub entry: FeedbackEntry,
    pub merged: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitFeedbackError {
    #[error(transparent)]
    InvalidInput(#[from] FeedbackError),
}

/// Once validated, a submission is committed: archive and event failures are
/// logged and never returned, so a retried request is not counted twice.
pub struct SubmitFeedbackHandler {
    aggregator: SharedAggregator,
    archive: Arc<dyn FeedbackArchive>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl SubmitFeedbackHandler {
    pub fn new(
        aggregator: SharedAggregator,
        archive: Arc<dyn FeedbackArchive>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            aggregator,
            archive,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitFeedbackCommand,
    ) -> Result<SubmitFeedbackResult, SubmitFeedbackError> {
        let mut aggregator = self.aggregator.lock().await;

        let outcome = aggregator.submit(&cmd.topic, &cmd.text, cmd.satisfaction)?;

        if outcome.merged {
            debug!(
                feedback_id = %outcome.entry.id,
                frequency = outcome.entry.frequency,
                "submission merged into existing entry"
            );
        }

        if let Err(e) = self.archive.save_snapshot(aggregator.entries()).await {
            warn!(error = %e, "failed to archive feedback snapshot");
        }

        self.publish(&FeedbackSubmitted::new(&outcome.entry, outcome.merged))
            .await;

        let entries = aggregator.len();
        drop(aggregator);

        info!(
            feedback_id = %outcome.entry.id,
            topic = %outcome.entry.topic,
            importance = ?outcome.entry.importance,
            merged = outcome.merged,
            entries,
            "feedback submitted"
        );

        Ok(SubmitFeedbackResult {
            entry: outcome.entry,
            merged: outcome.merged,
        })
    }

    async fn publish(&self, event: &FeedbackSubmitted) {
        let envelope = match EventEnvelope::from_event(event) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!(feedback_id = %event.feedback_id, error = %e, "failed to encode feedback event");
                return;
            }
        };
        if let Err(e) = self.event_publisher.publish(envelope).await {
            warn!(feedback_id = %event.feedback_id, error = %e, "failed to publish feedback event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::storage::InMemoryFeedbackArchive;
    use crate::application::handlers::feedback::FEEDBACK_SUBMITTED;
    use crate::domain::feedback::Importance;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use async_trait::async_trait;

    struct FailingPublisher;

    #[async_trait]
    impl EventPublisher for FailingPublisher {
        async fn publish(&self, _: EventEnvelope) -> Result<(), DomainError> {
            Err(DomainError::new(
                ErrorCode::EventDeliveryFailed,
                "Simulated delivery failure",
            ))
        }

        async fn publish_all(&self, _: Vec<EventEnvelope>) -> Result<(), DomainError> {
            Err(DomainError::new(
                ErrorCode::EventDeliveryFailed,
                "Simulated delivery failure",
            ))
        }
    }

    fn command(topic: &str, text: &str, satisfaction: i64) -> SubmitFeedbackCommand {
        SubmitFeedbackCommand {
            topic: topic.to_string(),
            text: text.to_string(),
            satisfaction,
        }
    }

    fn handler(
        archive: InMemoryFeedbackArchive,
    ) -> (SubmitFeedbackHandler, SharedAggregator, Arc<InMemoryEventBus>) {
        let aggregator = shared_aggregator(FeedbackAggregator::default());
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = SubmitFeedbackHandler::new(aggregator.clone(), Arc::new(archive), bus.clone());
        (handler, aggregator, bus)
    }

    #[tokio::test]
    async fn merges_duplicates_and_publishes_each_submission() {
        let archive = InMemoryFeedbackArchive::new();
        let (handler, aggregator, bus) = handler(archive.clone());

        let first = handler
            .handle(command("healthcare", "Hospital wait times are too long", 2))
            .await
            .unwrap();
        let second = handler
            .handle(command("healthcare", "hospital  wait times are too LONG", 1))
            .await
            .unwrap();

        assert!(!first.merged);
        assert!(second.merged);
        assert_eq!(second.entry.id, first.entry.id);
        assert_eq!(second.entry.frequency, 2);
        assert_eq!(second.entry.importance, Importance::Medium);

        assert_eq!(aggregator.lock().await.len(), 1);
        assert_eq!(archive.save_count(), 2);
        assert_eq!(bus.events_of_type(FEEDBACK_SUBMITTED).len(), 2);
    }

    #[tokio::test]
    async fn archive_failure_does_not_fail_submission() {
        let (handler, aggregator, bus) = handler(InMemoryFeedbackArchive::failing());

        let result = handler
            .handle(command("education", "More teachers in rural schools", 4))
            .await;

        assert!(result.is_ok());
        assert_eq!(aggregator.lock().await.len(), 1);
        assert_eq!(bus.event_count(), 1);
    }

    #[tokio::test]
    async fn publish_failure_keeps_submission_committed() {
        let aggregator = shared_aggregator(FeedbackAggregator::default());
        let handler = SubmitFeedbackHandler::new(
            aggregator.clone(),
            Arc::new(InMemoryFeedbackArchive::new()),
            Arc::new(FailingPublisher),
        );

        let first = handler
            .handle(command("transport", "Buses are always late", 3))
            .await
            .unwrap();
        let retried = handler
            .handle(command("transport", "Buses are always late", 3))
            .await
            .unwrap();

        assert!(!first.merged);
        assert!(retried.merged);
        assert_eq!(retried.entry.frequency, 2);
        assert_eq!(aggregator.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn invalid_satisfaction_leaves_collection_untouched() {
        let archive = InMemoryFeedbackArchive::new();
        let (handler, aggregator, bus) = handler(archive.clone());

        let result = handler.handle(command("roads", "Potholes", 11)).await;

        assert!(matches!(result, Err(SubmitFeedbackError::InvalidInput(_))));
        assert!(aggregator.lock().await.is_empty());
        assert_eq!(archive.save_count(), 0);
        assert_eq!(bus.event_count(), 0);
    }
}
