//! Test fixtures and data generators
//!
//! Provides reusable request bodies for integration tests.

use serde::{Deserialize, Serialize};

/// Presence event body as a client sends it
#[derive(Debug, Clone, Serialize)]
pub struct EventRequest {
    pub location: String,
    pub datetime: String,
    pub arrived: bool,
    pub person: String,
}

impl EventRequest {
    pub fn arrival(person: &str, location: &str, datetime: &str) -> Self {
        Self {
            location: location.to_string(),
            datetime: datetime.to_string(),
            arrived: true,
            person: person.to_string(),
        }
    }

    pub fn departure(person: &str, location: &str, datetime: &str) -> Self {
        Self {
            arrived: false,
            ..Self::arrival(person, location, datetime)
        }
    }
}

/// `{"message": ...}` response body
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub message: String,
}
