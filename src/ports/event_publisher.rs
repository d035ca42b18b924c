//! EventPublisher port - Interface for publishing domain events.
//!
//! Views that render the shared distribution or the feedback collection
//! learn about changes through published events instead of polling storage.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// Implementations must ensure:
/// - Errors are propagated to the caller
/// - `publish_all` delivers in order
///
/// # Example
///
/// ```ignore
/// let envelope = EventEnvelope::from_event(&BudgetDistributed::from(&distribution))?;
/// publisher.publish(envelope).await?;
/// ```
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish several events, stopping at the first failure.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError>;
}
