//! Client error type.
//!
//! An HTTP response is never an error here: 4xx and 5xx responses come back
//! as `Ok(ApiResponse)` with their status and body untouched. [`ClientError`]
//! covers only the cases where no response exists to hand back.

/// Errors that prevent a request from producing a response.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP layer failed: connection refused, timeout, TLS, body read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A request body could not be encoded, or a response body could not be
    /// decoded into the requested type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is missing or malformed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The base URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A non-HTTP transport failed (e.g. a mock with no response queued).
    #[error("transport error: {0}")]
    Transport(String),
}
