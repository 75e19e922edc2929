// src/api/error.rs
// Error type for HTTP responses: every failure leaves the server as {"error": "..."}

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use tracing::warn;

use super::types::CalculationResult;
use crate::calculator::CalcError;

/// Standard API error response format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
}

impl ApiError {
    /// Create a new bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::custom(StatusCode::BAD_REQUEST, message)
    }

    /// Create a new not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::custom(StatusCode::NOT_FOUND, message)
    }

    /// Create a new custom error with specific status code
    pub fn custom(status_code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// All calculation failures are client errors
impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

/// A body that could not be read (too large, aborted) keeps the rejection's
/// status but still reports the generic input message.
impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        warn!("Rejected request body: {}", rejection.body_text());
        ApiError::custom(rejection.status(), CalcError::InvalidInput.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code, Json(CalculationResult::failure(self.message))).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
