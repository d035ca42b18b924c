//! Event infrastructure for notifying other views of domain changes.
//!
//! - `EventId` - Unique identifier for events (deduplication)
//! - `EventEnvelope` - Transport wrapper for domain events
//! - `DomainEvent` - Trait that all domain events implement

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

use super::Timestamp;

/// Trait that all domain events must implement.
pub trait DomainEvent: Send + Sync {
    /// Returns the event type string (e.g., "budget.distributed.v1").
    fn event_type(&self) -> &'static str;

    /// Returns the ID of the aggregate that emitted this event.
    fn aggregate_id(&self) -> String;

    /// Returns when the event occurred.
    fn occurred_at(&self) -> Timestamp;
}

/// Unique identifier for events.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates a new random EventId using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transport envelope for domain events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique ID for this event instance.
    pub event_id: EventId,

    /// Event type for routing (e.g., "feedback.submitted.v1").
    pub event_type: String,

    /// Schema version number (extracted from event_type).
    pub schema_version: u32,

    /// ID of the aggregate that emitted this event.
    pub aggregate_id: String,

    /// When the event occurred.
    pub occurred_at: Timestamp,

    /// Event-specific payload as JSON.
    pub payload: JsonValue,
}

impl EventEnvelope {
    /// Creates a new EventEnvelope with required fields.
    pub fn new(
        event_type: impl Into<String>,
        aggregate_id: impl Into<String>,
        payload: JsonValue,
    ) -> Self {
        let event_type = event_type.into();
        let schema_version = Self::extract_version(&event_type);

        Self {
            event_id: EventId::new(),
            event_type,
            schema_version,
            aggregate_id: aggregate_id.into(),
            occurred_at: Timestamp::now(),
            payload,
        }
    }

    /// Creates an envelope from a domain event, serializing it as the payload.
    pub fn from_event<T>(event: &T) -> Result<Self, serde_json::Error>
    where
        T: DomainEvent + Serialize,
    {
        let event_type = event.event_type().to_string();
        let schema_version = Self::extract_version(&event_type);

        Ok(Self {
            event_id: EventId::new(),
            event_type,
            schema_version,
            aggregate_id: event.aggregate_id(),
            occurred_at: event.occurred_at(),
            payload: serde_json::to_value(event)?,
        })
    }

    /// Extracts the version number from an event type ("x.y.v2" → 2, default 1).
    fn extract_version(event_type: &str) -> u32 {
        event_type
            .rsplit_once(".v")
            .and_then(|(_, version_str)| version_str.parse::<u32>().ok())
            .unwrap_or(1)
    }

    /// Deserialize payload to a specific event type.
    pub fn payload_as<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize)]
    struct SampleEvent {
        id: String,
        at: Timestamp,
    }

    impl DomainEvent for SampleEvent {
        fn event_type(&self) -> &'static str {
            "sample.happened.v2"
        }

        fn aggregate_id(&self) -> String {
            self.id.clone()
        }

        fn occurred_at(&self) -> Timestamp {
            self.at
        }
    }

    #[test]
    fn event_id_generates_unique_values() {
        assert_ne!(EventId::new(), EventId::new());
    }

    #[test]
    fn envelope_new_defaults_to_version_one() {
        let envelope = EventEnvelope::new("legacy.event", "agg-1", json!({}));
        assert_eq!(envelope.schema_version, 1);
        assert_eq!(envelope.aggregate_id, "agg-1");
    }

    #[test]
    fn envelope_from_event_extracts_fields() {
        let event = SampleEvent {
            id: "agg-9".to_string(),
            at: Timestamp::now(),
        };
        let envelope = EventEnvelope::from_event(&event).unwrap();

        assert_eq!(envelope.event_type, "sample.happened.v2");
        assert_eq!(envelope.schema_version, 2);
        assert_eq!(envelope.aggregate_id, "agg-9");
        assert_eq!(envelope.occurred_at, event.at);
    }

    #[test]
    fn envelope_payload_round_trips_into_event() {
        let event = SampleEvent {
            id: "agg-3".to_string(),
            at: Timestamp::now(),
        };
        let envelope = EventEnvelope::from_event(&event).unwrap();
        let decoded: SampleEvent = envelope.payload_as().unwrap();
        assert_eq!(decoded.id, "agg-3");
    }
}
