//! Axum extractors for request handling
//!
//! Body extractors that separate unparseable payloads from invalid requests.

mod validated;

pub use validated::{JsonBody, ValidatedJson};
