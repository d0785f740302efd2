//! Shared helpers for the ALM REST client conformance suite.
//!
//! Provides [`MockAlm`], an in-process stand-in for the ALM server. It binds
//! a `TcpListener` on an ephemeral port, records every request it receives,
//! and answers with whatever [`Reply`] a test programmed for that method and
//! path. Routes with no programmed reply answer `404` with a JSON:API error
//! document, the same shape the real server uses.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use almrest_api::{titles, ErrorDocument, ErrorObject};
use almrest_client::{AlmClient, ClientConfig};
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::Value;

/// Path prefix the mock serves the API under.
pub const API_PREFIX: &str = "/rest/v1";

/// Bearer token configured on clients built by [`MockAlm::client`].
pub const TOKEN: &str = "conformance-token";

// ---------------------------------------------------------------------------
// Recorded requests
// ---------------------------------------------------------------------------

/// One request as the server saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,

    /// Path relative to [`API_PREFIX`], e.g. `projects/P/plans`.
    pub path: String,

    /// Decoded query pairs in arrival order.
    pub query: Vec<(String, String)>,

    /// Header names are lowercase.
    pub headers: BTreeMap<String, String>,

    pub body: Bytes,
}

impl RecordedRequest {
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The body parsed as JSON, if it is JSON.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

// ---------------------------------------------------------------------------
// Programmed replies
// ---------------------------------------------------------------------------

/// A canned response.
#[derive(Debug, Clone)]
pub struct Reply {
    status: u16,
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl Reply {
    pub fn json(status: u16, body: &Value) -> Self {
        Self {
            status,
            headers: vec![("content-type".into(), "application/json".into())],
            body: Bytes::from(body.to_string()),
        }
    }

    /// The JSON:API error envelope for `status`.
    pub fn error(status: u16, detail: &str) -> Self {
        let title = titles::for_status(status).unwrap_or("Error");
        let doc = ErrorDocument::single(ErrorObject::new(status, title, detail));
        Self::json(status, &serde_json::to_value(&doc).unwrap_or(Value::Null))
    }

    pub fn bytes(status: u16, content_type: &str, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: vec![("content-type".into(), content_type.into())],
            body: body.into(),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_ascii_lowercase(), value.to_string()));
        self
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            if let (Ok(name), Ok(value)) = (
                HeaderName::try_from(name.as_str()),
                HeaderValue::from_str(value),
            ) {
                headers.insert(name, value);
            }
        }
        (status, headers, self.body).into_response()
    }
}

// ---------------------------------------------------------------------------
// Server
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Shared {
    replies: Mutex<HashMap<(String, String), Reply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

async fn handle(
    State(shared): State<Arc<Shared>>,
    method: Method,
    uri: Uri,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    body: Bytes,
) -> Reply {
    let path = uri
        .path()
        .strip_prefix(API_PREFIX)
        .unwrap_or(uri.path())
        .trim_start_matches('/')
        .to_string();
    let headers = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    let key = (method.as_str().to_string(), path.clone());

    shared.requests.lock().unwrap().push(RecordedRequest {
        method: key.0.clone(),
        path,
        query,
        headers,
        body,
    });

    let programmed = shared.replies.lock().unwrap().get(&key).cloned();
    programmed.unwrap_or_else(|| {
        Reply::error(404, &format!("no reply programmed for {} {}", key.0, key.1))
    })
}

/// An ephemeral in-process ALM server.
pub struct MockAlm {
    base_url: String,
    shared: Arc<Shared>,
}

impl MockAlm {
    /// Start the server on an OS-assigned port on `127.0.0.1`.
    ///
    /// # Panics
    ///
    /// Panics if the TCP listener cannot be bound.
    pub async fn spawn() -> Self {
        init_tracing();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("get local addr");
        let shared = Arc::new(Shared::default());

        let router = Router::new()
            .fallback(handle)
            .with_state(Arc::clone(&shared));
        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("mock ALM server error");
        });

        Self {
            base_url: format!("http://{addr}{API_PREFIX}"),
            shared,
        }
    }

    /// Full API base URL, e.g. `http://127.0.0.1:51234/rest/v1`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(self.base_url.as_str())
            .with_token(TOKEN)
            .with_timeout_secs(5)
    }

    /// A real HTTP client pointed at this server.
    pub fn client(&self) -> AlmClient {
        AlmClient::from_config(&self.config()).expect("client for mock server")
    }

    /// Answer `method path` with `reply` from now on. `path` is relative to
    /// [`API_PREFIX`].
    pub fn reply(&self, method: &str, path: &str, reply: Reply) {
        self.shared
            .replies
            .lock()
            .unwrap()
            .insert((method.to_ascii_uppercase(), path.to_string()), reply);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.shared.requests.lock().unwrap().clone()
    }

    /// # Panics
    ///
    /// Panics if no request has arrived yet.
    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("mock ALM server received no request")
    }
}

/// Install a `tracing` subscriber writing to the test output. Honours
/// `RUST_LOG`, defaulting to `almrest_client=debug`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "almrest_client=debug".into()),
        )
        .with_test_writer()
        .try_init();
}
