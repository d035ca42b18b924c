//! Builds the running service from configuration.

use std::sync::Arc;
use tracing::info;

use crate::adapters::events::{AuditLogHandler, InMemoryEventBus};
use crate::adapters::http::{api_router, with_service_layers, AppState};
use crate::adapters::storage::{
    FileDistributionStore, FileFeedbackArchive, InMemoryDistributionStore, InMemoryFeedbackArchive,
};
use crate::application::handlers::{restore_aggregator, shared_aggregator, shared_jitter};
use crate::config::{AppConfig, StorageBackend};
use crate::domain::budget::SeededJitter;
use crate::ports::{DistributionStore, EventSubscriber, FeedbackArchive};

/// Everything the HTTP layer needs, plus the bus for callers that observe events.
pub struct Services {
    pub state: AppState,
    pub event_bus: Arc<InMemoryEventBus>,
}

/// Wires ports, adapters and shared locks for `config`.
///
/// The feedback collection is restored from the archive before returning.
pub async fn build_services(config: &AppConfig) -> Services {
    let (distribution_store, feedback_archive): (
        Arc<dyn DistributionStore>,
        Arc<dyn FeedbackArchive>,
    ) = match config.storage.backend {
        StorageBackend::Memory => (
            Arc::new(InMemoryDistributionStore::new()),
            Arc::new(InMemoryFeedbackArchive::new()),
        ),
        StorageBackend::File => (
            Arc::new(FileDistributionStore::new(&config.storage.data_dir)),
            Arc::new(FileFeedbackArchive::new(&config.storage.data_dir)),
        ),
    };

    let event_bus = Arc::new(InMemoryEventBus::new());
    event_bus.subscribe_all(AuditLogHandler::EVENT_TYPES, Arc::new(AuditLogHandler::new()));

    let jitter = match config.distribution.jitter_seed {
        Some(seed) => shared_jitter(SeededJitter::from_seed(seed)),
        None => shared_jitter(SeededJitter::from_entropy()),
    };

    let aggregator =
        restore_aggregator(feedback_archive.clone(), config.feedback.to_policy()).await;

    info!(
        backend = ?config.storage.backend,
        seeded = config.distribution.jitter_seed.is_some(),
        feedback_entries = aggregator.len(),
        "services initialized"
    );

    let state = AppState::new(
        distribution_store,
        feedback_archive,
        event_bus.clone(),
        jitter,
        shared_aggregator(aggregator),
    );

    Services { state, event_bus }
}

/// The full router with service layers, ready to serve.
pub async fn build_app(config: &AppConfig) -> axum::Router {
    let services = build_services(config).await;
    with_service_layers(api_router(services.state), &config.server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;
    use crate::domain::feedback::FeedbackAggregator;

    #[tokio::test]
    async fn memory_backend_starts_empty() {
        let services = build_services(&AppConfig::default()).await;

        assert!(services.state.aggregator.lock().await.is_empty());
        assert!(services
            .state
            .distribution_store
            .load_current()
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn file_backend_restores_archived_feedback() {
        let dir = tempfile::tempdir().unwrap();
        let mut seed = FeedbackAggregator::default();
        seed.submit("transport", "night buses are too rare", 3).unwrap();
        FileFeedbackArchive::new(dir.path())
            .save_snapshot(seed.entries())
            .await
            .unwrap();

        let config = AppConfig {
            storage: StorageConfig {
                backend: StorageBackend::File,
                data_dir: dir.path().to_path_buf(),
            },
            ..Default::default()
        };
        let services = build_services(&config).await;

        assert_eq!(services.state.aggregator.lock().await.len(), 1);
    }
}
