//! Error types for survey-processor
//!
//! Every pipeline failure funnels into `ApiError`, which performs the
//! single mapping to a response outcome: validation failures become a
//! 400 with `{"error": <reason>}`, everything else becomes a 500 with
//! the generic internal-error body carrying the underlying message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::description_generator::DescriptionError;
use crate::services::validator::ValidationError;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client-caused validation failure (400)
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Template read or model invocation failure (500)
    #[error("{0}")]
    Description(#[from] DescriptionError),

    /// Store write failure (500)
    #[error("Failed to store survey insights: {0}")]
    Persistence(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response(),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "description": "Internal Server Error",
                    "status": 500,
                    "message": other.to_string(),
                })),
            )
                .into_response(),
        }
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
