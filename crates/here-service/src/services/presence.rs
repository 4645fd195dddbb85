//! Presence service
//!
//! Records arrivals and departures and dumps the raw store.
//!
//! Per (person, location) there are two states: away (no arrival record)
//! and present. An arrival always writes the arrival record, silently
//! replacing an open one. A departure from the present state appends the
//! visit to the history and clears the arrival record; a departure while
//! away changes nothing.
//!
//! The departure path reads the history, appends, and writes it back with
//! no lock around the sequence. Two departures racing on the same pair can
//! lose one append.

use std::fmt;

use here_core::{EventKind, PresenceEvent, Visit, VisitHistory};
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::dto::{MessageResponse, StoreSnapshot};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// What a recorded event did to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Arrival record written
    Arrived { event: PresenceEvent },
    /// Visit closed and appended to the history
    Left {
        event: PresenceEvent,
        arrived_at: String,
    },
    /// Departure without an open arrival
    LeftWithoutArrival { event: PresenceEvent },
}

impl fmt::Display for RecordOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arrived { event } => write!(
                f,
                "{} arrived {} at {}",
                event.person(),
                event.location(),
                event.datetime
            ),
            Self::Left { event, arrived_at } => write!(
                f,
                "{} left {} at {} (arrived at {arrived_at})",
                event.person(),
                event.location(),
                event.datetime
            ),
            Self::LeftWithoutArrival { event } => write!(
                f,
                "{} left {} at {} (has no arrival)",
                event.person(),
                event.location(),
                event.datetime
            ),
        }
    }
}

impl From<RecordOutcome> for MessageResponse {
    fn from(outcome: RecordOutcome) -> Self {
        Self::new(outcome.to_string())
    }
}

/// Presence service
pub struct PresenceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PresenceService<'a> {
    /// Create a new PresenceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply a validated presence event to the store
    #[instrument(skip(self, event), fields(key = %event.key, kind = %event.kind))]
    pub async fn record_event(&self, event: PresenceEvent) -> ServiceResult<RecordOutcome> {
        match event.kind {
            EventKind::Arrival => self.record_arrival(event).await,
            EventKind::Departure => self.record_departure(event).await,
        }
    }

    async fn record_arrival(&self, event: PresenceEvent) -> ServiceResult<RecordOutcome> {
        let store = self.ctx.store();
        store.put(&event.key.arrive_key(), &event.datetime).await?;

        info!(at = %event.datetime, "Arrival recorded");
        Ok(RecordOutcome::Arrived { event })
    }

    async fn record_departure(&self, event: PresenceEvent) -> ServiceResult<RecordOutcome> {
        let store = self.ctx.store();
        let arrive_key = event.key.arrive_key();

        // An empty stored value counts as no arrival
        let arrived_at = match store.get(&arrive_key).await? {
            Some(value) if !value.is_empty() => value,
            _ => {
                info!(at = %event.datetime, "Departure without arrival");
                return Ok(RecordOutcome::LeftWithoutArrival { event });
            }
        };

        let history_key = event.key.history_key();
        let mut history = match store.get(&history_key).await? {
            Some(raw) if !raw.is_empty() => VisitHistory::decode(&history_key, &raw)?,
            _ => VisitHistory::new(),
        };
        history.push(Visit::new(arrived_at.clone(), event.datetime.clone()));

        let encoded = history
            .encode()
            .map_err(|e| ServiceError::internal(format!("Failed to encode history: {e}")))?;
        store.put(&history_key, &encoded).await?;
        store.delete(&arrive_key).await?;

        info!(
            arrived_at = %arrived_at,
            left_at = %event.datetime,
            visits = history.len(),
            "Departure recorded"
        );
        Ok(RecordOutcome::Left { event, arrived_at })
    }

    /// Snapshot every store entry
    ///
    /// Values that parse as JSON are returned structured, anything else as
    /// the raw string. Keys whose value vanished between listing and reading,
    /// or whose value is empty, are skipped.
    #[instrument(skip(self))]
    pub async fn dump(&self) -> ServiceResult<StoreSnapshot> {
        let store = self.ctx.store();
        let keys = store.list().await?;

        let mut snapshot = StoreSnapshot::new();
        for key in keys {
            let Some(raw) = store.get(&key).await? else {
                continue;
            };
            if raw.is_empty() {
                continue;
            }

            let value = serde_json::from_str::<Value>(&raw).unwrap_or_else(|_| Value::String(raw));
            snapshot.insert(key, value);
        }

        debug!(entries = snapshot.len(), "Store dumped");
        Ok(snapshot)
    }
}
