//! Request-shaping primitives for the ALM REST API.
//!
//! This crate has **no I/O**. It holds the three pure pieces every endpoint
//! call goes through before anything touches the network; the HTTP side
//! lives in `almrest-client`.
//!
//! # Crate layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`fields`] | The default field catalog: every collection mapped to `@all` |
//! | [`params`] | [`RequestOptions`] and the [`merge_params`] parameter merger |
//! | [`path`] | [`build_path`], positional substitution into endpoint templates |
//!
//! # Quick start
//!
//! ```rust
//! use almrest::{build_path, RequestOptions};
//!
//! let path = build_path("projects/{}/plans", &["MyProjectId"]);
//! let params = RequestOptions::new().page(25, 1).to_query();
//!
//! assert_eq!(path, "projects/MyProjectId/plans");
//! assert_eq!(params.fields().count(), 38);
//! assert!(params.contains_key("page[size]"));
//! ```

pub mod fields;
pub mod params;
pub mod path;

pub use fields::{default_fields, field_key, ALL_FIELDS, COLLECTIONS};
pub use params::{merge_params, ParamValue, QueryParams, RequestOptions};
pub use path::{build_path, placeholder_count};
