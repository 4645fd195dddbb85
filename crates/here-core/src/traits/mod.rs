//! Traits (ports) for infrastructure the domain depends on

mod store;

pub use store::{KeyValueStore, SharedStore, StoreError, StoreResult};
