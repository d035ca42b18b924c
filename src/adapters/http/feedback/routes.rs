//! HTTP routes for feedback endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_analysis, get_word_cloud, list_feedback, submit_feedback};
use crate::adapters::http::state::AppState;

/// Feedback routes, relative to `/api/feedback`.
pub fn feedback_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_feedback).post(submit_feedback))
        .route("/analysis", get(get_analysis))
        .route("/word-cloud", get(get_word_cloud))
}
