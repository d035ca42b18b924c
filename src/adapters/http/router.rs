//! Top-level API router.

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use super::budget::budget_routes;
use super::dashboard::dashboard_routes;
use super::feedback::feedback_routes;
use super::state::AppState;

/// GET /api/health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Mounts every endpoint under `/api`.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .nest("/api/budget", budget_routes())
        .nest("/api/dashboards", dashboard_routes())
        .nest("/api/feedback", feedback_routes())
        .with_state(state)
}
