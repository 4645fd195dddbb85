//! Key-value store port - the only persistence the presence handler uses
//!
//! Values are opaque strings. Any structured encoding (such as the JSON
//! visit history) is done by the caller. Implementations live in
//! `here-store`; none of the operations are transactional.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a store backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected or failed a command
    #[error("Store backend error: {0}")]
    Backend(String),

    /// The backend could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn put(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`; removing a missing key is not an error
    async fn delete(&self, key: &str) -> StoreResult<()>;

    /// List every key currently in the store
    async fn list(&self) -> StoreResult<Vec<String>>;
}

/// Store handle shared across request handlers
pub type SharedStore = Arc<dyn KeyValueStore>;
