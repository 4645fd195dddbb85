//! Response DTOs for API endpoints

use std::collections::BTreeMap;

use serde::Serialize;

/// Body of every non-dump response, success or failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Every store entry, JSON values parsed and anything else kept as a string
pub type StoreSnapshot = BTreeMap<String, serde_json::Value>;
