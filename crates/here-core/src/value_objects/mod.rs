//! Value objects - immutable types that represent domain concepts

mod datetime;
mod presence_key;

pub use datetime::is_utc_datetime;
pub use presence_key::{is_identifier, PresenceKey, ARRIVE_SUFFIX, HISTORY_SUFFIX};
