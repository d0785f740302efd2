//! JSON:API error envelope.
//!
//! The server answers failed requests with:
//!
//! ```json
//! {
//!   "errors": [
//!     {
//!       "status": "404",
//!       "title": "Not Found",
//!       "detail": "Project id MyProjectId does not exist.",
//!       "source": { "pointer": "$.data", "parameter": "string", "resource": { "id": "MyProjectId", "type": "projects" } }
//!     }
//!   ]
//! }
//! ```
//!
//! The client returns such bodies untouched; these types exist so callers
//! (and tests) can read them.

use serde::{Deserialize, Serialize};

use crate::document::ResourceIdentifier;

/// Body of an error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorDocument {
    pub errors: Vec<ErrorObject>,
}

impl ErrorDocument {
    /// A document holding a single error.
    pub fn single(error: ErrorObject) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Status of the first error, if any.
    pub fn first_status(&self) -> Option<&str> {
        self.errors.first().and_then(|e| e.status.as_deref())
    }
}

/// One entry of the `errors` array.
///
/// `status` is the HTTP status code rendered as a string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
}

impl ErrorObject {
    pub fn new(status: u16, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status: Some(status.to_string()),
            title: Some(title.into()),
            detail: Some(detail.into()),
            source: None,
        }
    }

    pub fn with_source(mut self, source: ErrorSource) -> Self {
        self.source = Some(source);
        self
    }
}

/// Where in the request the error originated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorSource {
    /// JSON pointer into the request document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,

    /// Name of the offending query parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<ResourceIdentifier>,
}

/// Titles the server pairs with the statuses it documents.
pub mod titles {
    pub const BAD_REQUEST: &str = "Bad Request";
    pub const UNAUTHORIZED: &str = "Unauthorized";
    pub const FORBIDDEN: &str = "Forbidden";
    pub const NOT_FOUND: &str = "Not Found";
    pub const CONFLICT: &str = "Conflict";
    pub const PAYLOAD_TOO_LARGE: &str = "Request Entity Too Large";
    pub const UNSUPPORTED_MEDIA_TYPE: &str = "Unsupported Media Type";
    pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
    pub const SERVICE_UNAVAILABLE: &str = "Service Unavailable";

    /// Title for a status code, or `None` for statuses the API does not document.
    pub fn for_status(status: u16) -> Option<&'static str> {
        match status {
            400 => Some(BAD_REQUEST),
            401 => Some(UNAUTHORIZED),
            403 => Some(FORBIDDEN),
            404 => Some(NOT_FOUND),
            409 => Some(CONFLICT),
            413 => Some(PAYLOAD_TOO_LARGE),
            415 => Some(UNSUPPORTED_MEDIA_TYPE),
            500 => Some(INTERNAL_SERVER_ERROR),
            503 => Some(SERVICE_UNAVAILABLE),
            _ => None,
        }
    }
}
