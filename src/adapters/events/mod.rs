//! Event bus adapters.
//!
//! - `InMemoryEventBus` - In-process bus delivering to subscribers inline
//! - `AuditLogHandler` - Subscriber that logs every domain event

mod audit_log;
mod in_memory;

pub use audit_log::AuditLogHandler;
pub use in_memory::{InMemoryEventBus, DEFAULT_HISTORY_LIMIT};
