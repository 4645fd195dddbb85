//! Business logic services

pub mod context;
pub mod error;
pub mod presence;

pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use presence::{PresenceService, RecordOutcome};
