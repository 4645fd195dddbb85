//! # here-store
//!
//! Adapters implementing the `KeyValueStore` port from `here-core`.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Redis Store**: Raw string values, optional key namespace, `SCAN`-based listing
//! - **Memory Store**: Process-local sorted map for development and tests
//!
//! ## Example
//!
//! ```ignore
//! use here_store::{connect, MemoryStore};
//!
//! // Pick the backend from configuration
//! let store = connect(&config.store).await?;
//!
//! // Or use the in-memory store directly
//! let store = MemoryStore::shared();
//! store.put("taimoor-gym-arrive", "2024-01-15T10:00:00Z").await?;
//! ```

pub mod kv;
pub mod pool;

use std::sync::Arc;

use here_common::{AppError, AppResult, StoreBackend, StoreConfig};
use here_core::SharedStore;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export store implementations
pub use kv::{MemoryStore, RedisStore};

/// Build the store selected by configuration
///
/// For Redis the pool is created and pinged once so a bad URL fails at startup.
pub async fn connect(config: &StoreConfig) -> AppResult<SharedStore> {
    match config.backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory store");
            Ok(MemoryStore::shared())
        }
        StoreBackend::Redis => {
            let redis = config
                .redis
                .as_ref()
                .ok_or_else(|| AppError::Config("REDIS_URL is required for the redis backend".into()))?;

            let pool = RedisPool::from_config(redis).map_err(AppError::store)?;
            pool.health_check().await.map_err(AppError::store)?;

            Ok(Arc::new(RedisStore::new(pool, config.namespace.clone())))
        }
    }
}
