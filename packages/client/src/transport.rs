//! The transport seam.
//!
//! Resource modules never talk to the network themselves. They build a
//! [`Request`] and hand it to a [`Session`], which forwards it to whatever
//! [`Transport`] it was constructed with and returns the [`ApiResponse`]
//! unchanged.
//!
//! # Implementations
//!
//! | Type | When to use |
//! |------|-------------|
//! | [`ReqwestTransport`] | Real HTTP against a server |
//! | [`MockTransport`] | Tests: canned responses, recorded requests |
//!
//! [`ReqwestTransport`]: crate::http::ReqwestTransport
//! [`MockTransport`]: crate::mock::MockTransport

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use almrest::QueryParams;
use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::ClientError;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// HTTP verbs used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One file of a multipart upload, sent in a `files` field.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub file_name: String,
    pub content: Bytes,
    /// Content type of the part; the transport's default when `None`.
    pub mime: Option<String>,
}

impl FilePart {
    pub fn new(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
            mime: None,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }
}

/// A `multipart/form-data` body: an optional JSON `resource` field followed
/// by one `files` field per file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Multipart {
    pub resource: Option<Value>,
    pub files: Vec<FilePart>,
}

impl Multipart {
    /// A body with a metadata document and its files.
    pub fn with_resource<T: Serialize + ?Sized>(
        resource: &T,
        files: Vec<FilePart>,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            resource: Some(serde_json::to_value(resource)?),
            files,
        })
    }

    /// A body with files only.
    pub fn files(files: Vec<FilePart>) -> Self {
        Self {
            resource: None,
            files,
        }
    }
}

/// The body of a request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(Multipart),
}

impl RequestBody {
    /// Encode any serialisable value as a JSON body.
    pub fn json<T: Serialize + ?Sized>(body: &T) -> Result<Self, ClientError> {
        Ok(RequestBody::Json(serde_json::to_value(body)?))
    }

    /// The JSON payload, if this is a JSON body.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            RequestBody::Json(v) => Some(v),
            _ => None,
        }
    }

    /// The multipart payload, if this is a multipart body.
    pub fn as_multipart(&self) -> Option<&Multipart> {
        match self {
            RequestBody::Multipart(m) => Some(m),
            _ => None,
        }
    }
}

/// A fully built request: verb, path relative to the API base, query
/// parameters, body.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub params: QueryParams,
    pub body: RequestBody,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: QueryParams::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }
}

// ---------------------------------------------------------------------------
// ApiResponse
// ---------------------------------------------------------------------------

/// The response to a request, exactly as the transport produced it.
///
/// No status code is ever turned into an error: check
/// [`status_code`](Self::status_code) and read the body yourself.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: u16,
    /// Header names are stored lowercase.
    headers: BTreeMap<String, String>,
    body: Bytes,
}

impl ApiResponse {
    /// An empty response with the given status.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: BTreeMap::new(),
            body: Bytes::new(),
        }
    }

    /// Assemble a response from already-collected parts.
    pub fn from_parts(status: u16, headers: BTreeMap<String, String>, body: Bytes) -> Self {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Set a JSON body and the matching `content-type`.
    pub fn with_json(self, body: &Value) -> Self {
        self.with_header("content-type", "application/json")
            .with_body(body.to_string())
    }

    pub fn status_code(&self) -> u16 {
        self.status
    }

    /// `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Look up a header, ignoring case. A repeated header comes back as one
    /// value joined with `", "`.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The raw body bytes. Binary endpoints (downloads, attachment content,
    /// avatars) are read through this.
    pub fn content(&self) -> &Bytes {
        &self.body
    }

    /// The body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decode the body as JSON into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Decode the body as untyped JSON.
    pub fn json_value(&self) -> Result<Value, ClientError> {
        self.json()
    }
}

// ---------------------------------------------------------------------------
// Transport / Session
// ---------------------------------------------------------------------------

/// Something that can carry a [`Request`] to the server.
///
/// Implementations must be `Send + Sync + 'static` so they can be held in an
/// `Arc<dyn Transport>` and shared by every resource handle.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Perform the request. Any response the server sends, whatever its
    /// status, is `Ok`; `Err` means no response exists.
    async fn send(&self, request: Request) -> Result<ApiResponse, ClientError>;
}

/// Cloneable handle to an injected [`Transport`], exposing the verb-shaped
/// calls the resource modules use.
#[derive(Clone)]
pub struct Session {
    transport: Arc<dyn Transport>,
}

impl Session {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Send a request as-is.
    pub async fn send(&self, request: Request) -> Result<ApiResponse, ClientError> {
        debug!(
            "session: {} {} ({} params)",
            request.method,
            request.path,
            request.params.len()
        );
        let response = self.transport.send(request).await?;
        debug!("session: status {}", response.status_code());
        Ok(response)
    }

    pub async fn get(&self, path: &str, params: QueryParams) -> Result<ApiResponse, ClientError> {
        self.send(Request::new(Method::Get, path).with_params(params))
            .await
    }

    pub async fn post(&self, path: &str, body: RequestBody) -> Result<ApiResponse, ClientError> {
        self.send(Request::new(Method::Post, path).with_body(body))
            .await
    }

    pub async fn patch(&self, path: &str, body: RequestBody) -> Result<ApiResponse, ClientError> {
        self.send(Request::new(Method::Patch, path).with_body(body))
            .await
    }

    pub async fn delete(&self, path: &str, body: RequestBody) -> Result<ApiResponse, ClientError> {
        self.send(Request::new(Method::Delete, path).with_body(body))
            .await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use serde_json::json;

    #[test]
    fn header_lookup_ignores_case() {
        let r = ApiResponse::new(200).with_header("Content-Disposition", "attachment");
        assert_eq!(r.header("content-disposition"), Some("attachment"));
        assert_eq!(r.header("CONTENT-DISPOSITION"), Some("attachment"));
    }

    #[test]
    fn from_parts_lowercases_header_names() {
        let headers = BTreeMap::from([("X-Request-Id".to_string(), "abc".to_string())]);
        let r = ApiResponse::from_parts(204, headers, Bytes::new());
        assert_eq!(r.headers().get("x-request-id").map(String::as_str), Some("abc"));
    }

    #[test]
    fn success_range() {
        assert!(ApiResponse::new(200).is_success());
        assert!(ApiResponse::new(204).is_success());
        assert!(!ApiResponse::new(301).is_success());
        assert!(!ApiResponse::new(404).is_success());
    }

    #[test]
    fn json_body_roundtrips_through_bytes() {
        let payload = json!({ "data": { "type": "jobs", "id": "1" } });
        let r = ApiResponse::new(200).with_json(&payload);
        assert_eq!(r.header("content-type"), Some("application/json"));
        assert_eq!(r.json_value().unwrap(), payload);
    }

    #[test]
    fn invalid_json_body_is_a_json_error() {
        let r = ApiResponse::new(200).with_body("not json");
        assert!(matches!(r.json_value(), Err(ClientError::Json(_))));
        assert_eq!(r.text(), "not json");
    }

    #[test]
    fn binary_content_is_untouched() {
        let r = ApiResponse::new(200).with_body(vec![0u8, 159, 146, 150]);
        assert_eq!(&r.content()[..], &[0u8, 159, 146, 150]);
    }

    #[test]
    fn request_body_json_encodes_serialisable_values() {
        #[derive(Serialize)]
        struct Body {
            data: Vec<u8>,
        }
        let body = RequestBody::json(&Body { data: vec![1, 2] }).unwrap();
        assert_eq!(body.as_json(), Some(&json!({ "data": [1, 2] })));
        assert!(body.as_multipart().is_none());
    }

    #[tokio::test]
    async fn session_verbs_build_expected_requests() {
        let mock = Arc::new(
            MockTransport::new()
                .with_response(ApiResponse::new(200))
                .with_response(ApiResponse::new(201))
                .with_response(ApiResponse::new(200))
                .with_response(ApiResponse::new(204)),
        );
        let session = Session::new(mock.clone());

        let params: QueryParams = [("include", "x")].into_iter().collect();
        session.get("a", params.clone()).await.unwrap();
        session.post("b", RequestBody::Json(json!({}))).await.unwrap();
        session.patch("c", RequestBody::Empty).await.unwrap();
        session.delete("d", RequestBody::Json(json!([]))).await.unwrap();

        let seen = mock.requests();
        let verbs: Vec<_> = seen.iter().map(|r| (r.method, r.path.as_str())).collect();
        assert_eq!(
            verbs,
            vec![
                (Method::Get, "a"),
                (Method::Post, "b"),
                (Method::Patch, "c"),
                (Method::Delete, "d"),
            ]
        );
        assert_eq!(seen[0].params, params);
        assert!(seen[1].params.is_empty());
        assert_eq!(seen[3].body, RequestBody::Json(json!([])));
    }

    #[tokio::test]
    async fn session_returns_error_statuses_unchanged() {
        let body = json!({ "errors": [{ "status": "503", "title": "Service Unavailable" }] });
        let mock = Arc::new(MockTransport::new().with_response(ApiResponse::new(503).with_json(&body)));
        let session = Session::new(mock);

        let r = session.get("revisions", QueryParams::new()).await.unwrap();
        assert_eq!(r.status_code(), 503);
        assert_eq!(r.json_value().unwrap(), body);
    }
}
