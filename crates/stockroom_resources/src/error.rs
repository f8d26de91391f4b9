//! Error types for fetch operations.

/// Errors produced while fetching a resource.
///
/// The store stringifies these into the resource's error message; the
/// `Display` output is what users see.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport failure. Displays the transport's message as-is.
    #[error("{0}")]
    Http(String),

    /// Non-success HTTP status without a readable server message.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The server answered `success: false`. Displays the server's message as-is.
    #[error("{0}")]
    Rejected(String),

    /// The response was well-formed JSON but not a usable envelope.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The fetch future panicked.
    #[error("fetch panicked: {0}")]
    Panicked(String),
}
