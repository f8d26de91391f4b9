//! The `{ success, result, message }` response envelope.

use crate::error::FetchError;
use serde::{Deserialize, Serialize};

/// Message used when the server reports a failure without saying why.
pub const DEFAULT_FAILURE_MESSAGE: &str = "the server reported a failure without a message";

/// Response wrapper returned by every inventory endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the server fulfilled the request.
    pub success: bool,
    /// Payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    /// Human-readable message, usually present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// A successful envelope carrying `result`.
    #[must_use]
    pub fn ok(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            message: None,
        }
    }

    /// A failed envelope carrying `message`.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            message: Some(message.into()),
        }
    }

    /// Unwraps the payload.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Rejected`] when `success` is false, carrying the server
    ///   message or [`DEFAULT_FAILURE_MESSAGE`] if it is missing or blank.
    /// - [`FetchError::InvalidResponse`] when `success` is true but `result`
    ///   is missing.
    pub fn into_result(self) -> Result<T, FetchError> {
        if !self.success {
            let message = self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
            return Err(FetchError::Rejected(message));
        }

        self.result.ok_or_else(|| {
            FetchError::InvalidResponse("successful response is missing `result`".to_string())
        })
    }
}
