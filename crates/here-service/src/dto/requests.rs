//! Request DTOs for API endpoints
//!
//! Request DTOs implement `Deserialize` and `Validate` for input validation.

use here_core::{is_identifier, is_utc_datetime, EventKind, PresenceEvent, PresenceKey};
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Report that a person arrived at or left a location
///
/// Unknown fields are ignored; every listed field is required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordEventRequest {
    #[validate(custom(function = "validate_identifier"))]
    pub location: String,

    /// ISO-8601 UTC timestamp, stored verbatim
    #[validate(custom(function = "validate_datetime"))]
    pub datetime: String,

    /// `true` for an arrival, `false` for a departure
    pub arrived: bool,

    #[validate(custom(function = "validate_identifier"))]
    pub person: String,
}

impl RecordEventRequest {
    /// Convert a validated request into a domain event
    pub fn into_event(self) -> PresenceEvent {
        PresenceEvent::new(
            PresenceKey::new(self.person, self.location),
            self.datetime,
            EventKind::from_arrived(self.arrived),
        )
    }
}

fn validate_identifier(value: &str) -> Result<(), ValidationError> {
    if is_identifier(value) {
        Ok(())
    } else {
        Err(ValidationError::new("identifier")
            .with_message("must be non-empty and contain only letters, digits or '_'".into()))
    }
}

fn validate_datetime(value: &str) -> Result<(), ValidationError> {
    if is_utc_datetime(value) {
        Ok(())
    } else {
        Err(ValidationError::new("datetime")
            .with_message("must be an ISO-8601 UTC date-time".into()))
    }
}
