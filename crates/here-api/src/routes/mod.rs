//! Route definitions
//!
//! The whole API is a single resource at `/`.

use axum::{routing::get, Router};

use crate::handlers::presence;
use crate::state::AppState;

/// Create the API router
///
/// `GET` (and `HEAD`) dump the store, `POST` records an event. Any other
/// method still has its body checked before being rejected.
pub fn create_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(presence::dump)
            .post(presence::record_event)
            .fallback(presence::unsupported_method),
    )
}
