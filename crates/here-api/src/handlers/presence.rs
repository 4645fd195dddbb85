//! Presence handlers
//!
//! Record arrivals and departures, and dump the whole store.

use axum::{extract::State, http::Method, Json};
use here_core::DomainError;
use here_service::{MessageResponse, PresenceService, RecordEventRequest, StoreSnapshot};

use crate::extractors::{JsonBody, ValidatedJson};
use crate::response::{ApiError, ApiResult, PrettyJson};
use crate::state::AppState;

/// Dump every store entry
///
/// GET /
pub async fn dump(State(state): State<AppState>) -> ApiResult<PrettyJson<StoreSnapshot>> {
    let snapshot = PresenceService::new(state.service_context()).dump().await?;
    Ok(PrettyJson(snapshot))
}

/// Record an arrival or departure
///
/// POST /
pub async fn record_event(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RecordEventRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let outcome = PresenceService::new(state.service_context())
        .record_event(request.into_event())
        .await?;

    Ok(Json(outcome.into()))
}

/// Reject any other method on `/`
///
/// The body must still be JSON; a malformed body reports as such before the
/// method is rejected.
pub async fn unsupported_method(method: Method, JsonBody(_): JsonBody) -> ApiError {
    DomainError::invalid_request(format!("{method} is not a presence request")).into()
}
