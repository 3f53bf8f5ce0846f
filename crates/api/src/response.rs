//! Shared response payloads for API handlers.

use serde::Serialize;

/// Flat `{message}` payload returned by every successful mutation.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub message: String,
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{token}` payload returned by a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
