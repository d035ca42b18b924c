//! HTTP routes for budget endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{current, disaster_adjustment, distribute};
use crate::adapters::http::state::AppState;

/// Budget routes, relative to `/api/budget`.
pub fn budget_routes() -> Router<AppState> {
    Router::new()
        .route("/distribute", post(distribute))
        .route("/current", get(current))
        .route("/disaster-adjustment", post(disaster_adjustment))
}
