//! End-to-end scenarios through the application handlers.

use std::sync::Arc;

use budget_allocation::adapters::events::InMemoryEventBus;
use budget_allocation::adapters::storage::{InMemoryDistributionStore, InMemoryFeedbackArchive};
use budget_allocation::application::handlers::{
    shared_aggregator, shared_jitter, AdjustForDisasterCommand, AdjustForDisasterHandler,
    DistributeBudgetCommand, DistributeBudgetHandler, GetDashboardHandler, GetDashboardQuery,
    SubmitFeedbackCommand, SubmitFeedbackHandler, BUDGET_DISTRIBUTED, FEEDBACK_SUBMITTED,
};
use budget_allocation::domain::budget::{
    DisasterSector, DistributionPolicy, SectorWeight, ZeroJitter,
};
use budget_allocation::domain::dashboard::DashboardView;
use budget_allocation::domain::feedback::{FeedbackAggregator, Importance, Sentiment};

const RURAL: &str =
    "The budget allocation for healthcare facilities in rural areas is insufficient.";
const EQUIPMENT: &str =
    "Healthcare budget needs to be increased to improve equipment in public hospitals.";

#[tokio::test]
async fn dissimilar_healthcare_complaints_stay_separate() {
    let aggregator = shared_aggregator(FeedbackAggregator::default());
    let bus = Arc::new(InMemoryEventBus::new());
    let handler = SubmitFeedbackHandler::new(
        aggregator.clone(),
        Arc::new(InMemoryFeedbackArchive::new()),
        bus.clone(),
    );

    for text in [RURAL, EQUIPMENT] {
        let result = handler
            .handle(SubmitFeedbackCommand {
                topic: "healthcare".to_string(),
                text: text.to_string(),
                satisfaction: 3,
            })
            .await
            .unwrap();
        assert!(!result.merged);
    }

    let aggregator = aggregator.lock().await;
    assert_eq!(aggregator.len(), 2);
    for entry in aggregator.entries() {
        assert_eq!(entry.topic, "Healthcare");
        assert_eq!(entry.sentiment, Sentiment::Negative);
        assert_eq!(entry.importance, Importance::Medium);
        assert_eq!(entry.frequency, 1);
    }
    assert_eq!(bus.events_of_type(FEEDBACK_SUBMITTED).len(), 2);
}

#[tokio::test]
async fn zero_jitter_distribution_is_exact_and_shared_by_both_dashboards() {
    let store = Arc::new(InMemoryDistributionStore::new());
    let bus = Arc::new(InMemoryEventBus::new());
    let distribute =
        DistributeBudgetHandler::new(store.clone(), bus.clone(), shared_jitter(ZeroJitter));

    let weights = vec![
        SectorWeight::new("Healthcare", 22.0),
        SectorWeight::new("Infrastructure", 20.0),
        SectorWeight::new("Education", 18.0),
        SectorWeight::new("Defence", 15.0),
        SectorWeight::new("Agriculture", 13.0),
        SectorWeight::new("SocialWelfare", 12.0),
    ];
    let result = distribute
        .handle(DistributeBudgetCommand {
            total: 100_000,
            weights: Some(weights),
            policy: DistributionPolicy::General,
        })
        .await
        .unwrap();

    let amounts: Vec<i64> = result.distribution.sectors.iter().map(|s| s.amount).collect();
    assert_eq!(amounts, vec![22_000, 20_000, 18_000, 15_000, 13_000, 12_000]);
    assert_eq!(result.distribution.rounding_drift(), 0);
    assert!(bus.has_event(BUDGET_DISTRIBUTED));

    let dashboards = GetDashboardHandler::new(store);
    for view in [DashboardView::Government, DashboardView::Public] {
        let snapshot = dashboards.handle(GetDashboardQuery { view }).await.unwrap();
        let shown: Vec<i64> = snapshot.sectors.iter().map(|s| s.amount).collect();
        assert_eq!(shown, amounts);
        assert_eq!(snapshot.facts.top_sector.as_deref(), Some("Healthcare"));
        assert_eq!(snapshot.facts.per_capita, 714.29);
    }
}

#[tokio::test]
async fn disaster_fund_within_headroom_is_raised_exactly() {
    let store = Arc::new(InMemoryDistributionStore::new());
    let handler = AdjustForDisasterHandler::new(
        store,
        Arc::new(InMemoryEventBus::new()),
        shared_jitter(ZeroJitter),
    );
    let sectors = vec![
        DisasterSector::new("Healthcare", 50_000, 1),
        DisasterSector::new("Infrastructure", 45_000, 2),
        DisasterSector::new("Education", 40_000, 3),
        DisasterSector::new("Defense", 35_000, 4),
        DisasterSector::new("Agriculture", 30_000, 5),
        DisasterSector::new("SocialWelfare", 25_000, 6),
    ];

    let result = handler
        .handle(AdjustForDisasterCommand {
            required_fund: Some(10_000),
            sectors: Some(sectors),
            ..Default::default()
        })
        .await
        .unwrap();

    let adjustment = result.adjustment;
    assert!(adjustment.is_fully_funded());
    assert_eq!(adjustment.totals.reduction, 10_000);
    assert_eq!(adjustment.totals.original_budget, 225_000);
    assert_eq!(adjustment.totals.adjusted_budget, 215_000);
    for row in &adjustment.sectors {
        assert!(row.reduction * 10 <= row.original_budget * 3);
    }
}

#[tokio::test]
async fn disaster_fund_beyond_headroom_reports_shortfall() {
    let handler = AdjustForDisasterHandler::new(
        Arc::new(InMemoryDistributionStore::new()),
        Arc::new(InMemoryEventBus::new()),
        shared_jitter(ZeroJitter),
    );

    let result = handler
        .handle(AdjustForDisasterCommand {
            required_fund: Some(100_000),
            ..Default::default()
        })
        .await
        .unwrap();

    // Baseline of 225,000 frees at most 67,500.
    assert_eq!(result.adjustment.totals.reduction, 67_500);
    assert_eq!(result.adjustment.shortfall, 32_500);
}
