//! Events published when feedback is accepted.

use serde::{Deserialize, Serialize};

use crate::domain::feedback::{FeedbackEntry, Importance};
use crate::domain::foundation::{DomainEvent, FeedbackId, Timestamp};

/// Event type of [`FeedbackSubmitted`].
pub const FEEDBACK_SUBMITTED: &str = "feedback.submitted.v1";

/// A submission was created or merged into an existing cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSubmitted {
    pub feedback_id: FeedbackId,
    pub topic: String,
    pub merged: bool,
    pub frequency: u32,
    pub importance: Importance,
    pub submitted_at: Timestamp,
}

impl FeedbackSubmitted {
    pub fn new(entry: &FeedbackEntry, merged: bool) -> Self {
        Self {
            feedback_id: entry.id,
            topic: entry.topic.clone(),
            merged,
            frequency: entry.frequency,
            importance: entry.importance,
            submitted_at: entry.updated_at,
        }
    }
}

impl DomainEvent for FeedbackSubmitted {
    fn event_type(&self) -> &'static str {
        FEEDBACK_SUBMITTED
    }

    fn aggregate_id(&self) -> String {
        self.feedback_id.to_string()
    }

    fn occurred_at(&self) -> Timestamp {
        self.submitted_at
    }
}
