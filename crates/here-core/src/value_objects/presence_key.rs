//! Presence key - names the store entries of one (person, location) pair
//!
//! Keys are `{person}-{location}-arrive` and `{person}-{location}-history`.
//! Both parts are restricted to `[a-zA-Z0-9_]`, so the `-` separator cannot
//! appear inside them and two pairs never share a key.

use std::fmt;

/// Suffix of the open-visit marker key
pub const ARRIVE_SUFFIX: &str = "arrive";
/// Suffix of the completed-visit log key
pub const HISTORY_SUFFIX: &str = "history";

/// Check that `value` is a non-empty run of ASCII letters, digits or `_`
pub fn is_identifier(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Identifies the state of one person at one location
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PresenceKey {
    person: String,
    location: String,
}

impl PresenceKey {
    /// Create a key for a validated person and location
    pub fn new(person: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            person: person.into(),
            location: location.into(),
        }
    }

    pub fn person(&self) -> &str {
        &self.person
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Store key of the arrival record
    pub fn arrive_key(&self) -> String {
        format!("{self}-{ARRIVE_SUFFIX}")
    }

    /// Store key of the visit history
    pub fn history_key(&self) -> String {
        format!("{self}-{HISTORY_SUFFIX}")
    }
}

impl fmt::Display for PresenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.person, self.location)
    }
}
