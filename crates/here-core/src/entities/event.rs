//! Presence event - a person arriving at or leaving a location

use std::fmt;

use crate::value_objects::PresenceKey;

/// Direction of a presence event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Arrival,
    Departure,
}

impl EventKind {
    /// Map the wire `arrived` flag onto an event kind
    #[inline]
    pub fn from_arrived(arrived: bool) -> Self {
        if arrived {
            Self::Arrival
        } else {
            Self::Departure
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arrival => write!(f, "arrival"),
            Self::Departure => write!(f, "departure"),
        }
    }
}

/// A validated presence event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceEvent {
    pub key: PresenceKey,
    /// Timestamp exactly as submitted by the client
    pub datetime: String,
    pub kind: EventKind,
}

impl PresenceEvent {
    pub fn new(key: PresenceKey, datetime: impl Into<String>, kind: EventKind) -> Self {
        Self {
            key,
            datetime: datetime.into(),
            kind,
        }
    }

    pub fn person(&self) -> &str {
        self.key.person()
    }

    pub fn location(&self) -> &str {
        self.key.location()
    }
}
