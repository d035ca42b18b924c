//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `DistributionStore` - The current budget distribution shared by all views
//! - `FeedbackArchive` - Peripheral snapshot of the feedback collection
//!
//! ## Event Ports
//!
//! - `EventPublisher` - Port for publishing domain events
//! - `EventSubscriber` - Port for subscribing to domain events
//! - `EventHandler` - Handler that processes incoming events

mod distribution_store;
mod event_publisher;
mod event_subscriber;
mod feedback_archive;
mod store_error;

pub use distribution_store::DistributionStore;
pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventHandler, EventSubscriber};
pub use feedback_archive::FeedbackArchive;
pub use store_error::StoreError;
