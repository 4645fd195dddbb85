//! # here-service
//!
//! Application layer: request DTOs with validation, and the presence
//! service that turns validated events into store mutations.

pub mod dto;
pub mod services;

pub use dto::{MessageResponse, RecordEventRequest, StoreSnapshot};
pub use services::{PresenceService, RecordOutcome, ServiceContext, ServiceError, ServiceResult};
