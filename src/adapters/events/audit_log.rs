//! AuditLogHandler - writes every delivered event to the tracing log.
//!
//! ## Usage
//!
//! ```ignore
//! bus.subscribe_all(AuditLogHandler::EVENT_TYPES, Arc::new(AuditLogHandler::new()));
//! ```

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

use crate::application::handlers::budget::BUDGET_DISTRIBUTED;
use crate::application::handlers::feedback::FEEDBACK_SUBMITTED;
use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventHandler;

/// Logs each event with its type, aggregate and schema version.
#[derive(Debug, Default)]
pub struct AuditLogHandler {
    seen: AtomicU64,
}

impl AuditLogHandler {
    /// Event types the service publishes.
    pub const EVENT_TYPES: &'static [&'static str] = &[BUDGET_DISTRIBUTED, FEEDBACK_SUBMITTED];

    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events handled so far.
    pub fn seen(&self) -> u64 {
        self.seen.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl EventHandler for AuditLogHandler {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.seen.fetch_add(1, Ordering::Relaxed);
        info!(
            event_id = %event.event_id,
            event_type = %event.event_type,
            aggregate_id = %event.aggregate_id,
            schema_version = event.schema_version,
            "domain event"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "AuditLogHandler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventBus;
    use crate::ports::{EventPublisher, EventSubscriber};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_audit_log_counts_subscribed_events() {
        let bus = InMemoryEventBus::new();
        let audit = Arc::new(AuditLogHandler::new());
        bus.subscribe_all(AuditLogHandler::EVENT_TYPES, audit.clone());

        bus.publish(EventEnvelope::new(BUDGET_DISTRIBUTED, "d-1", json!({})))
            .await
            .unwrap();
        bus.publish(EventEnvelope::new(FEEDBACK_SUBMITTED, "f-1", json!({})))
            .await
            .unwrap();
        bus.publish(EventEnvelope::new("other.event.v1", "x", json!({})))
            .await
            .unwrap();

        assert_eq!(audit.seen(), 2);
    }
}
