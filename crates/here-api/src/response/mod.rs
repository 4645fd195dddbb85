//! Response types and error handling for API endpoints
//!
//! Every error renders as `{"message": "..."}`. Client errors carry one of
//! two fixed messages; server error details only reach the logs.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use here_core::DomainError;
use here_service::{MessageResponse, ServiceError};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};
use validator::ValidationErrors;

/// Message for a body that is not JSON
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON";
/// Message for JSON that is not a valid presence request
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request";
/// Message for any server-side failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Domain(e) if e.is_validation() => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Domain(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "INVALID_REQUEST",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this error was caused by the client's input
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Service(e) => e.is_client_error(),
            _ => self.status_code().is_client_error(),
        }
    }

    /// Message shown to the client
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self.domain() {
            Some(DomainError::InvalidPayload(_)) => INVALID_JSON_MESSAGE,
            _ if self.is_client_error() => INVALID_REQUEST_MESSAGE,
            _ => INTERNAL_ERROR_MESSAGE,
        }
    }

    fn domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) | Self::Service(ServiceError::Domain(e)) => Some(e),
            _ => None,
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_client_error() {
            debug!(error = %self, code = self.error_code(), "Request rejected");
        } else {
            error!(error = ?self, code = self.error_code(), "Server error occurred");
        }

        (status, Json(MessageResponse::new(self.public_message()))).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// JSON body pretty-printed with a two-space indent
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_string_pretty(&self.0) {
            Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
            Err(e) => ApiError::internal(e).into_response(),
        }
    }
}
