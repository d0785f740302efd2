//! Async client for the ALM REST API.
//!
//! Each endpoint is one method that builds its path, merges the caller's
//! options over the default field catalog, makes a single call through the
//! shared [`Session`], and hands back the [`ApiResponse`] untouched. A `404`
//! or `500` is an `Ok` response with that status; `Err` only means no
//! response exists at all (connection failure, bad configuration, a body
//! that could not be encoded).
//!
//! ```no_run
//! use almrest::RequestOptions;
//! use almrest_client::AlmClient;
//!
//! # async fn run() -> Result<(), almrest_client::ClientError> {
//! let client = AlmClient::from_env()?;
//! let response = client
//!     .plans()
//!     .get_plans("MyProjectId", &RequestOptions::new().page(123, 1))
//!     .await?;
//!
//! if response.is_success() {
//!     println!("{}", response.text());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod mock;
pub mod resources;
pub mod transport;

pub use almrest::{build_path, merge_params, ParamValue, QueryParams, RequestOptions};
pub use client::AlmClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use http::ReqwestTransport;
pub use resources::{AttachmentFile, LinkRef, TestRecordRef};
pub use transport::{ApiResponse, FilePart, Method, Multipart, Request, RequestBody, Session, Transport};
