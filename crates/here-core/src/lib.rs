//! # here-core
//!
//! Domain layer for presence tracking: key naming, visit history, the
//! key-value store port and domain errors.
//! This crate has zero dependencies on infrastructure (Redis, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{EventKind, PresenceEvent, Visit, VisitHistory};
pub use error::DomainError;
pub use traits::{KeyValueStore, SharedStore, StoreError, StoreResult};
pub use value_objects::{is_identifier, is_utc_datetime, PresenceKey, ARRIVE_SUFFIX, HISTORY_SUFFIX};
