//! In-Memory Feedback Archive Adapter

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::feedback::FeedbackEntry;
use crate::ports::{FeedbackArchive, StoreError};

/// Archive that keeps the last snapshot in memory.
///
/// Can be switched into a failing mode to exercise error paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFeedbackArchive {
    snapshot: Arc<RwLock<Vec<FeedbackEntry>>>,
    saves: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

impl InMemoryFeedbackArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// An archive whose writes always fail.
    pub fn failing() -> Self {
        let archive = Self::default();
        archive.failing.store(true, Ordering::SeqCst);
        archive
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedbackArchive for InMemoryFeedbackArchive {
    async fn save_snapshot(&self, entries: &[FeedbackEntry]) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Io("archive unavailable".to_string()));
        }
        *self.snapshot.write().await = entries.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn load_snapshot(&self) -> Result<Vec<FeedbackEntry>, StoreError> {
        Ok(self.snapshot.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feedback::FeedbackAggregator;

    #[tokio::test]
    async fn test_memory_archive_keeps_last_snapshot() {
        let archive = InMemoryFeedbackArchive::new();
        let mut aggregator = FeedbackAggregator::default();
        aggregator.submit("roads", "potholes everywhere downtown", 2).unwrap();

        archive.save_snapshot(aggregator.entries()).await.unwrap();
        archive.save_snapshot(aggregator.entries()).await.unwrap();

        assert_eq!(archive.save_count(), 2);
        assert_eq!(archive.load_snapshot().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failing_archive_reports_io_error() {
        let archive = InMemoryFeedbackArchive::failing();
        assert!(matches!(
            archive.save_snapshot(&[]).await,
            Err(StoreError::Io(_))
        ));
        assert_eq!(archive.save_count(), 0);
    }
}
