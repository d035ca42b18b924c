//! HTTP handlers for feedback endpoints.

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::SubmitFeedbackCommand;
use crate::domain::feedback::{FeedbackAnalysis, FeedbackEntry, WordCloudTerm};

use super::dto::{SubmitFeedbackRequest, SubmitFeedbackResponse, WordCloudParams};

/// POST /api/feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(request): Json<SubmitFeedbackRequest>,
) -> Result<(StatusCode, Json<SubmitFeedbackResponse>), ApiError> {
    let cmd = SubmitFeedbackCommand {
        topic: request.topic,
        text: request.text,
        satisfaction: request.satisfaction,
    };
    let result = state.submit_feedback_handler().handle(cmd).await?;
    Ok((
        StatusCode::CREATED,
        Json(SubmitFeedbackResponse {
            entry: result.entry,
            merged: result.merged,
        }),
    ))
}

/// GET /api/feedback
pub async fn list_feedback(State(state): State<AppState>) -> Json<Vec<FeedbackEntry>> {
    Json(state.list_feedback_handler().handle().await)
}

/// GET /api/feedback/analysis
pub async fn get_analysis(State(state): State<AppState>) -> Json<FeedbackAnalysis> {
    Json(state.feedback_analysis_handler().handle().await)
}

/// GET /api/feedback/word-cloud?limit=
pub async fn get_word_cloud(
    State(state): State<AppState>,
    Query(params): Query<WordCloudParams>,
) -> Json<Vec<WordCloudTerm>> {
    Json(state.word_cloud_handler().handle(params.limit).await)
}
