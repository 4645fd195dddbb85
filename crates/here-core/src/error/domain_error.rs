//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::traits::StoreError;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Client Errors
    // =========================================================================
    /// Body is not parseable as JSON at all
    #[error("Invalid JSON: {0}")]
    InvalidPayload(String),

    /// Body parsed but does not describe a presence event
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Corrupt visit history under key {key}: {source}")]
    CorruptHistory {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPayload(_) => "INVALID_JSON",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::Store(_) => "STORE_ERROR",
            Self::CorruptHistory { .. } => "CORRUPT_HISTORY",
        }
    }

    /// Check if this error was caused by the client's input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidPayload(_) | Self::InvalidRequest(_))
    }

    /// Create an invalid request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest(reason.into())
    }

    /// Create an invalid payload error
    pub fn invalid_payload(reason: impl Into<String>) -> Self {
        Self::InvalidPayload(reason.into())
    }
}
