//! Error responses shared by every HTTP module.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}

/// API error type that converts client input failures to HTTP responses.
///
/// Store failures never reach this type; they are recovered in the idea lookup.
#[derive(Debug)]
pub enum ApiError {
    /// Input parsed but failed a domain rule.
    Validation(ValidationError),
    /// Body or query string did not match the expected shape.
    MalformedRequest(String),
}

impl ApiError {
    fn code(&self) -> ErrorCode {
        match self {
            ApiError::Validation(err) => err.code(),
            ApiError::MalformedRequest(_) => ErrorCode::ValidationFailed,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Validation(err) => err.to_string(),
            ApiError::MalformedRequest(reason) => reason.clone(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new(self.code().to_string(), self.message());
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
