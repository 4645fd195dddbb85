//! Service context - dependency container for services
//!
//! Holds the store handle every service reads and writes through.

use here_core::SharedStore;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    store: SharedStore,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Get the key-value store
    pub fn store(&self) -> &SharedStore {
        &self.store
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("store", &"dyn KeyValueStore")
            .finish()
    }
}
