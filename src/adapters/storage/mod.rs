//! Storage Adapters
//!
//! Implementations of the `DistributionStore` and `FeedbackArchive` ports.
//!
//! ## Available Adapters
//!
//! - **FileDistributionStore** / **FileFeedbackArchive** - JSON files in a data directory
//! - **InMemoryDistributionStore** / **InMemoryFeedbackArchive** - process memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileDistributionStore, InMemoryDistributionStore};
//!
//! // Production: file-based storage
//! let store = FileDistributionStore::new("./data");
//!
//! // Testing: in-memory storage
//! let store = InMemoryDistributionStore::new();
//! ```

mod file_distribution_store;
mod file_feedback_archive;
mod in_memory_distribution_store;
mod in_memory_feedback_archive;

pub use file_distribution_store::{FileDistributionStore, DISTRIBUTION_FILE};
pub use file_feedback_archive::{FileFeedbackArchive, FEEDBACK_FILE};
pub use in_memory_distribution_store::InMemoryDistributionStore;
pub use in_memory_feedback_archive::InMemoryFeedbackArchive;
