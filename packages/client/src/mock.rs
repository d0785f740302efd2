//! In-memory transport for tests.
//!
//! [`MockTransport`] answers requests from a queue of canned responses and
//! records every request it receives, so a test can assert on the exact
//! path, parameters and body an endpoint produced.
//!
//! ```
//! use std::sync::Arc;
//!
//! use almrest::RequestOptions;
//! use almrest_client::mock::MockTransport;
//! use almrest_client::{ApiResponse, AlmClient};
//!
//! # tokio_test_block(async {
//! let mock = Arc::new(MockTransport::new().with_response(ApiResponse::new(200)));
//! let client = AlmClient::new(mock.clone());
//!
//! client.revisions().get_revisions(&RequestOptions::default()).await.unwrap();
//! assert_eq!(mock.last_request().unwrap().path, "revisions");
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ClientError;
use crate::transport::{ApiResponse, Request, Transport};

/// A [`Transport`] that replays queued responses in FIFO order.
///
/// A request that arrives when the queue is empty fails with
/// [`ClientError::Transport`]; it is still recorded.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<ApiResponse>>,
    requests: Mutex<Vec<Request>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response (builder form).
    pub fn with_response(self, response: ApiResponse) -> Self {
        self.push_response(response);
        self
    }

    /// Queue a response.
    pub fn push_response(&self, response: ApiResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<Request> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Number of queued responses not yet consumed.
    pub fn pending(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: Request) -> Result<ApiResponse, ClientError> {
        let label = format!("{} {}", request.method, request.path);
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ClientError::Transport(format!("mock: no response queued for {label}")))
    }
}

/// A response with the given status and JSON body.
pub fn json_response(status: u16, body: &Value) -> ApiResponse {
    ApiResponse::new(status).with_json(body)
}

/// A response carrying the standard error envelope for `status`.
pub fn error_response(status: u16, title: &str, detail: &str) -> ApiResponse {
    let body = serde_json::json!({
        "errors": [{
            "status": status.to_string(),
            "title": title,
            "detail": detail,
            "source": {
                "pointer": "$.data",
                "parameter": "string",
                "resource": { "id": "MyProjectId/id", "type": "type" }
            }
        }]
    });
    json_response(status, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::Method;

    #[tokio::test]
    async fn replays_responses_in_order() {
        let mock = MockTransport::new()
            .with_response(ApiResponse::new(200))
            .with_response(ApiResponse::new(404));

        let first = mock.send(Request::new(Method::Get, "a")).await.unwrap();
        let second = mock.send(Request::new(Method::Get, "b")).await.unwrap();

        assert_eq!(first.status_code(), 200);
        assert_eq!(second.status_code(), 404);
        assert_eq!(mock.pending(), 0);
    }

    #[tokio::test]
    async fn empty_queue_is_a_transport_error_but_request_is_recorded() {
        let mock = MockTransport::new();
        let err = mock
            .send(Request::new(Method::Delete, "projects/P"))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Transport(ref m) if m.contains("DELETE projects/P")));
        assert_eq!(mock.requests().len(), 1);
    }

    #[test]
    fn error_response_carries_envelope() {
        let r = error_response(409, "Conflict", "already exists");
        let body = r.json_value().unwrap();
        assert_eq!(r.status_code(), 409);
        assert_eq!(body["errors"][0]["status"], "409");
        assert_eq!(body["errors"][0]["detail"], "already exists");
    }
}
