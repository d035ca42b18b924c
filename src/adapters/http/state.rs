//! Shared application state for the HTTP adapters.

use std::sync::Arc;

use crate::application::handlers::{
    AdjustForDisasterHandler, DistributeBudgetHandler, GetCurrentDistributionHandler,
    GetDashboardHandler, GetFeedbackAnalysisHandler, GetWordCloudHandler, ListFeedbackHandler,
    SharedAggregator, SharedJitter, SubmitFeedbackHandler,
};
use crate::ports::{DistributionStore, EventPublisher, FeedbackArchive};

/// Ports and shared locks; handlers are built per request.
#[derive(Clone)]
pub struct AppState {
    pub distribution_store: Arc<dyn DistributionStore>,
    pub feedback_archive: Arc<dyn FeedbackArchive>,
    pub event_publisher: Arc<dyn EventPublisher>,
    pub jitter: SharedJitter,
    pub aggregator: SharedAggregator,
}

impl AppState {
    pub fn new(
        distribution_store: Arc<dyn DistributionStore>,
        feedback_archive: Arc<dyn FeedbackArchive>,
        event_publisher: Arc<dyn EventPublisher>,
        jitter: SharedJitter,
        aggregator: SharedAggregator,
    ) -> Self {
        Self {
            distribution_store,
            feedback_archive,
            event_publisher,
            jitter,
            aggregator,
        }
    }

    pub fn distribute_budget_handler(&self) -> DistributeBudgetHandler {
        DistributeBudgetHandler::new(
            self.distribution_store.clone(),
            self.event_publisher.clone(),
            self.jitter.clone(),
        )
    }

    pub fn adjust_for_disaster_handler(&self) -> AdjustForDisasterHandler {
        AdjustForDisasterHandler::new(
            self.distribution_store.clone(),
            self.event_publisher.clone(),
            self.jitter.clone(),
        )
    }

    pub fn current_distribution_handler(&self) -> GetCurrentDistributionHandler {
        GetCurrentDistributionHandler::new(self.distribution_store.clone())
    }

    pub fn dashboard_handler(&self) -> GetDashboardHandler {
        GetDashboardHandler::new(self.distribution_store.clone())
    }

    pub fn submit_feedback_handler(&self) -> SubmitFeedbackHandler {
        SubmitFeedbackHandler::new(
            self.aggregator.clone(),
            self.feedback_archive.clone(),
            self.event_publisher.clone(),
        )
    }

    pub fn list_feedback_handler(&self) -> ListFeedbackHandler {
        ListFeedbackHandler::new(self.aggregator.clone())
    }

    pub fn feedback_analysis_handler(&self) -> GetFeedbackAnalysisHandler {
        GetFeedbackAnalysisHandler::new(self.aggregator.clone())
    }

    pub fn word_cloud_handler(&self) -> GetWordCloudHandler {
        GetWordCloudHandler::new(self.aggregator.clone())
    }
}
