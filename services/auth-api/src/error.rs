//! Error types for the Auth API service.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use libris_auth_core::{AuthError, PolicyViolation};
use serde::Serialize;

/// API error response for internal failures
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Rejected-request body: violation messages grouped by rule code
#[derive(Debug, Serialize)]
pub struct ValidationErrorBody {
    pub errors: BTreeMap<String, Vec<String>>,
}

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(Vec<PolicyViolation>),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(violations) => Self::Validation(violations),
            AuthError::InvalidCredentials => Self::InvalidCredentials,
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log internal errors; their detail never reaches the caller
        if matches!(self, Self::Internal(_)) {
            tracing::error!(error = ?self, "Internal API error");
        }

        match self {
            Self::Validation(violations) => {
                let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
                for violation in violations {
                    errors.entry(violation.code).or_default().push(violation.message);
                }
                (StatusCode::BAD_REQUEST, Json(ValidationErrorBody { errors })).into_response()
            }
            // Deliberately bodyless: no signal distinguishes unknown
            // email from wrong password
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED.into_response(),
            Self::Internal(_) => {
                let body = ErrorResponse {
                    error: ErrorDetail {
                        code: "INTERNAL_ERROR".to_string(),
                        message: "internal error".to_string(),
                    },
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
