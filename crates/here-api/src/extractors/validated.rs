//! Validated JSON extractor
//!
//! Reads the request body as JSON regardless of `Content-Type`, then
//! deserializes and validates it using the validator crate.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use here_core::DomainError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::response::ApiError;

/// Any syntactically valid JSON body
///
/// An unreadable body or malformed JSON is rejected as an invalid payload.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| DomainError::invalid_payload(e.to_string()))?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| DomainError::invalid_payload(e.to_string()))?;

        Ok(JsonBody(value))
    }
}

/// Validated JSON extractor
///
/// Extracts a JSON body and validates it using the `validator` crate.
/// The inner type must implement both `Deserialize` and `Validate`.
/// JSON that does not fit `T` is an invalid request, not an invalid payload.
/// The body passes through a `Value` first, so a repeated key keeps its last
/// value.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(json) = JsonBody::from_request(req, state).await?;

        let value: T = serde_json::from_value(json)
            .map_err(|e| DomainError::invalid_request(e.to_string()))?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
