//! HTTP handlers for budget endpoints.

use axum::extract::{Json, State};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{AdjustForDisasterCommand, DistributeBudgetCommand};
use crate::domain::budget::BudgetDistribution;

use super::dto::{DisasterAdjustmentRequest, DisasterAdjustmentResponse, DistributeRequest};

/// POST /api/budget/distribute
///
/// Generates, persists and returns a new current distribution.
pub async fn distribute(
    State(state): State<AppState>,
    Json(request): Json<DistributeRequest>,
) -> Result<Json<BudgetDistribution>, ApiError> {
    let cmd = DistributeBudgetCommand {
        total: request.total,
        weights: request.weights,
        policy: request.policy.unwrap_or_default(),
    };
    let result = state.distribute_budget_handler().handle(cmd).await?;
    Ok(Json(result.distribution))
}

/// GET /api/budget/current
pub async fn current(State(state): State<AppState>) -> Result<Json<BudgetDistribution>, ApiError> {
    let distribution = state.current_distribution_handler().handle().await?;
    Ok(Json(distribution))
}

/// POST /api/budget/disaster-adjustment
pub async fn disaster_adjustment(
    State(state): State<AppState>,
    Json(request): Json<DisasterAdjustmentRequest>,
) -> Result<Json<DisasterAdjustmentResponse>, ApiError> {
    let cmd = AdjustForDisasterCommand {
        required_fund: request.required_fund,
        severity: request.severity,
        estimated_damage: request.estimated_damage,
        sectors: request
            .sectors
            .map(|sectors| sectors.into_iter().map(Into::into).collect()),
        apply: request.apply,
    };
    let result = state.adjust_for_disaster_handler().handle(cmd).await?;
    Ok(Json(DisasterAdjustmentResponse {
        fully_funded: result.adjustment.is_fully_funded(),
        adjustment: result.adjustment,
        applied_distribution: result.applied,
    }))
}
