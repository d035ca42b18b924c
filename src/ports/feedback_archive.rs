//! FeedbackArchive port - peripheral snapshot of the feedback collection.
//!
//! The live collection is owned by the aggregator. The archive only lets a
//! restarted process pick up where it left off.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::feedback::FeedbackEntry;

#[async_trait]
pub trait FeedbackArchive: Send + Sync {
    /// Overwrites the archive with `entries`, in ranked order.
    async fn save_snapshot(&self, entries: &[FeedbackEntry]) -> Result<(), StoreError>;

    /// Loads the archived entries; empty if nothing was archived.
    async fn load_snapshot(&self) -> Result<Vec<FeedbackEntry>, StoreError>;
}
