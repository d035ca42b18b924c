//! HTTP routes for dashboard endpoints.

use axum::{routing::get, Router};

use super::handlers::get_dashboard;
use crate::adapters::http::state::AppState;

/// Dashboard routes, relative to `/api/dashboards`.
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/:view", get(get_dashboard))
}
