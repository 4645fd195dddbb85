//! Redis-backed presence store
//!
//! Values are stored as plain strings under `{namespace}{key}`. The
//! namespace lets several deployments share one Redis database; it never
//! leaks into the keys handed back to callers.

use async_trait::async_trait;
use here_core::{KeyValueStore, StoreError, StoreResult};

use crate::pool::{RedisPool, RedisPoolError, SCAN_BATCH};

/// `KeyValueStore` on top of a pooled Redis connection
#[derive(Debug, Clone)]
pub struct RedisStore {
    pool: RedisPool,
    namespace: String,
}

impl RedisStore {
    /// Create a store; pass an empty namespace to use bare keys
    pub fn new(pool: RedisPool, namespace: impl Into<String>) -> Self {
        Self {
            pool,
            namespace: namespace.into(),
        }
    }

    fn namespaced(&self, key: &str) -> String {
        format!("{}{key}", self.namespace)
    }

    /// `SCAN MATCH` pattern selecting every key of this namespace
    fn match_pattern(&self) -> String {
        format!("{}*", escape_glob(&self.namespace))
    }
}

/// Escape Redis glob metacharacters so the namespace matches literally
fn escape_glob(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl From<RedisPoolError> for StoreError {
    fn from(err: RedisPoolError) -> Self {
        match err {
            RedisPoolError::GetConnection(e) => StoreError::unavailable(e.to_string()),
            RedisPoolError::CreatePool(msg) => StoreError::unavailable(msg),
            RedisPoolError::Redis(e) => StoreError::backend(e.to_string()),
        }
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.pool.get_string(&self.namespaced(key)).await?)
    }

    async fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        Ok(self.pool.set_string(&self.namespaced(key), value).await?)
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        self.pool.delete(&self.namespaced(key)).await?;
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<String>> {
        let keys = self.pool.scan_keys(&self.match_pattern(), SCAN_BATCH).await?;

        Ok(keys
            .into_iter()
            .filter_map(|key| key.strip_prefix(self.namespace.as_str()).map(String::from))
            .collect())
    }
}
