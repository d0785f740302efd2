//! HTTP transport backed by `reqwest`.
//!
//! [`ReqwestTransport`] joins each request path to the configured base URL,
//! URL-encodes the query parameters, attaches the body, and collects the
//! status, headers and raw body bytes of whatever comes back. Nothing about
//! the response is interpreted.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use tracing::warn;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::transport::{ApiResponse, Method, Multipart, Request, RequestBody, Transport};

/// A [`Transport`] that performs real HTTP requests.
///
/// Holds a cloneable [`reqwest::Client`], which pools connections internally,
/// so one instance can serve every resource handle concurrently.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Build a client from `config`: timeout, user agent, `Accept:
    /// application/json`, and the bearer token if one is set.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {e}", config.base_url)))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(ref token) = config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ClientError::Config("token contains invalid header characters".into()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self::with_client(client, &config.base_url))
    }

    /// Wrap a pre-configured client (e.g. with a custom TLS setup).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}/{path}`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// `resource` as a JSON text part, then one `files` part per file.
fn multipart_form(multipart: Multipart) -> Result<Form, ClientError> {
    let mut form = Form::new();
    if let Some(resource) = multipart.resource {
        let part = Part::text(resource.to_string()).mime_str("application/json")?;
        form = form.part("resource", part);
    }
    for file in multipart.files {
        let mut part = Part::bytes(file.content.to_vec()).file_name(file.file_name);
        if let Some(ref mime) = file.mime {
            part = part.mime_str(mime)?;
        }
        form = form.part("files", part);
    }
    Ok(form)
}

/// Every response header, keyed by lowercase name. Repeated headers are
/// joined with `", "` in arrival order; non-UTF-8 bytes are replaced rather
/// than dropped.
fn collect_headers(map: &HeaderMap) -> BTreeMap<String, String> {
    let mut headers: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in map {
        let value = String::from_utf8_lossy(value.as_bytes());
        match headers.get_mut(name.as_str()) {
            Some(joined) => {
                joined.push_str(", ");
                joined.push_str(&value);
            }
            None => {
                headers.insert(name.as_str().to_string(), value.into_owned());
            }
        }
    }
    headers
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: Request) -> Result<ApiResponse, ClientError> {
        let url = self.url_for(&request.path);
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), url.as_str());

        if !request.params.is_empty() {
            builder = builder.query(&request.params.to_pairs());
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(multipart) => builder.multipart(multipart_form(multipart)?),
        };

        let response = builder.send().await.map_err(|e| {
            warn!("http: {} {url} failed: {e}", request.method);
            ClientError::Http(e)
        })?;

        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response.bytes().await?;

        Ok(ApiResponse::from_parts(status, headers, body))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
