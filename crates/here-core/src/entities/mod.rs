//! Domain entities

mod event;
mod visit;

pub use event::{EventKind, PresenceEvent};
pub use visit::{Visit, VisitHistory};
