//! Response envelopes used by every endpoint.

use serde::{Deserialize, Serialize};

/// Successful response: a human-readable message next to the payload's
/// own fields, e.g. `{ "message": "Success", "posts": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub message: String,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self::with_message(data, "Success")
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// Error body: `{ "message": "..." }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn method_not_allowed() -> Self {
        Self::new("Method not allowed")
    }
}
