//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, rounding helpers, events and error
//! types that form the vocabulary of the budget allocation domain.

mod errors;
mod events;
mod ids;
mod percentage;
mod rounding;
mod satisfaction;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{DomainEvent, EventEnvelope, EventId};
pub use ids::{DistributionId, FeedbackId};
pub use percentage::Percentage;
pub use rounding::{div_round_half_up, round_to, share_round_half_up};
pub use satisfaction::Satisfaction;
pub use timestamp::Timestamp;
