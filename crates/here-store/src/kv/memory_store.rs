//! In-memory presence store
//!
//! A sorted map behind a `parking_lot` lock. Each operation takes the lock
//! on its own, so a read-modify-write across several calls is no more
//! atomic here than it is against Redis.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use here_core::{KeyValueStore, SharedStore, StoreResult};
use parking_lot::RwLock;

/// Process-local `KeyValueStore`
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store behind a shared handle
    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<String>> {
        Ok(self.entries.read().keys().cloned().collect())
    }
}
