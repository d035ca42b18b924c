//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `events` - In-process event bus and subscribers
//! - `http` - axum REST API
//! - `storage` - JSON-file and in-memory persistence

pub mod events;
pub mod http;
pub mod storage;

pub use events::{AuditLogHandler, InMemoryEventBus};
pub use storage::{
    FileDistributionStore, FileFeedbackArchive, InMemoryDistributionStore, InMemoryFeedbackArchive,
};
