//! API error type shared by every HTTP adapter.
//!
//! Invalid input maps to 400, infrastructure failures to 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::application::handlers::{
    AdjustForDisasterError, DistributeBudgetError, SubmitFeedbackError,
};
use crate::domain::budget::BudgetError;
use crate::domain::feedback::FeedbackError;
use crate::ports::StoreError;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            field: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            field: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(ErrorResponse),
    NotFound(ErrorResponse),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(body) => (StatusCode::BAD_REQUEST, Json(body)).into_response(),
            ApiError::NotFound(body) => (StatusCode::NOT_FOUND, Json(body)).into_response(),
            ApiError::Internal(msg) => {
                error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::internal(msg)),
                )
                    .into_response()
            }
        }
    }
}

impl From<BudgetError> for ApiError {
    fn from(error: BudgetError) -> Self {
        let validation = error.validation();
        ApiError::BadRequest(
            ErrorResponse::bad_request(validation.to_string()).with_field(validation.field()),
        )
    }
}

impl From<FeedbackError> for ApiError {
    fn from(error: FeedbackError) -> Self {
        match error {
            FeedbackError::InvalidInput(validation) => ApiError::BadRequest(
                ErrorResponse::bad_request(validation.to_string()).with_field(validation.field()),
            ),
            FeedbackError::EntryNotFound(id) => {
                ApiError::NotFound(ErrorResponse::not_found("Feedback entry", &id.to_string()))
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        ApiError::Internal(format!("Storage error: {}", error))
    }
}

impl From<DistributeBudgetError> for ApiError {
    fn from(error: DistributeBudgetError) -> Self {
        match error {
            DistributeBudgetError::InvalidInput(e) => e.into(),
            DistributeBudgetError::Storage(e) => e.into(),
            DistributeBudgetError::Events(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<AdjustForDisasterError> for ApiError {
    fn from(error: AdjustForDisasterError) -> Self {
        match error {
            AdjustForDisasterError::InvalidInput(e) => e.into(),
            AdjustForDisasterError::Storage(e) => e.into(),
            AdjustForDisasterError::Events(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<SubmitFeedbackError> for ApiError {
    fn from(error: SubmitFeedbackError) -> Self {
        match error {
            SubmitFeedbackError::InvalidInput(e) => e.into(),
        }
    }
}
