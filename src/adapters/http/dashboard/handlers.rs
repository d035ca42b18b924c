//! HTTP handlers for dashboard endpoints.

use axum::extract::{Json, Path, State};

use crate::adapters::http::error::{ApiError, ErrorResponse};
use crate::adapters::http::state::AppState;
use crate::application::handlers::GetDashboardQuery;
use crate::domain::dashboard::{DashboardSnapshot, DashboardView};

/// GET /api/dashboards/:view
///
/// Renders the `government` or `public` dashboard.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(view): Path<String>,
) -> Result<Json<DashboardSnapshot>, ApiError> {
    let view: DashboardView = view
        .parse()
        .map_err(|_| ApiError::NotFound(ErrorResponse::not_found("Dashboard", &view)))?;

    let snapshot = state
        .dashboard_handler()
        .handle(GetDashboardQuery { view })
        .await?;
    Ok(Json(snapshot))
}
