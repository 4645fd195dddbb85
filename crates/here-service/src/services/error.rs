//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use here_core::{DomainError, StoreError};
use thiserror::Error;
use validator::ValidationErrors;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Domain rule violation or wrapped infrastructure failure
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Request fields failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) if e.is_validation() => 400,
            Self::Validation(_) => 400,
            Self::Domain(_) | Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "INVALID_REQUEST",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this error was caused by the client's input
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        Self::Domain(DomainError::Store(err))
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
