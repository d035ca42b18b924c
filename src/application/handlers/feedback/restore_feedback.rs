//! Rebuilds the live feedback collection from the archive at startup.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::feedback::{FeedbackAggregator, FeedbackPolicy};
use crate::ports::FeedbackArchive;

/// Loads the archived snapshot into a fresh aggregator.
///
/// An unreadable archive starts an empty collection.
pub async fn restore_aggregator(
    archive: Arc<dyn FeedbackArchive>,
    policy: FeedbackPolicy,
) -> FeedbackAggregator {
    match archive.load_snapshot().await {
        Ok(entries) => {
            info!(entries = entries.len(), "feedback archive restored");
            FeedbackAggregator::restore(policy, entries)
        }
        Err(e) => {
            warn!(error = %e, "failed to load feedback archive, starting empty");
            FeedbackAggregator::new(policy)
        }
    }
}
