//! Visit history - completed visits of one person at one location
//!
//! Persisted as a JSON array of `[arrivedAt, leftAt]` string pairs, in the
//! order departures were processed. The history is append-only.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// One completed visit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Visit {
    pub arrived_at: String,
    pub left_at: String,
}

impl Visit {
    pub fn new(arrived_at: impl Into<String>, left_at: impl Into<String>) -> Self {
        Self {
            arrived_at: arrived_at.into(),
            left_at: left_at.into(),
        }
    }
}

impl From<(String, String)> for Visit {
    fn from((arrived_at, left_at): (String, String)) -> Self {
        Self { arrived_at, left_at }
    }
}

impl From<Visit> for (String, String) {
    fn from(visit: Visit) -> Self {
        (visit.arrived_at, visit.left_at)
    }
}

/// Ordered log of completed visits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitHistory(Vec<Visit>);

impl VisitHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a stored history value; `key` is only used for error reporting
    pub fn decode(key: &str, raw: &str) -> Result<Self, DomainError> {
        serde_json::from_str(raw).map_err(|source| DomainError::CorruptHistory {
            key: key.to_string(),
            source,
        })
    }

    /// Encode for storage
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Append a completed visit at the end of the log
    pub fn push(&mut self, visit: Visit) {
        self.0.push(visit);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn visits(&self) -> &[Visit] {
        &self.0
    }
}
