//! JSON:API wire types for the ALM REST API.
//!
//! These types describe request bodies and let callers read response
//! bodies. The client itself never decodes responses: every endpoint hands
//! back the raw HTTP response, and it is up to the caller to parse it into
//! one of the types below if they want to.
//!
//! # Types
//!
//! | Type | Used for |
//! |------|----------|
//! | [`Document`] | Any top-level document: `Document<Vec<Resource>>` for collections |
//! | [`Resource`] | Resource objects in request and response bodies |
//! | [`ResourceIdentifier`] | `{type, id}` pairs in relationships and delete requests |
//! | [`ErrorDocument`] | The `{"errors": [...]}` envelope of 4xx/5xx responses |
//! | [`AttachmentUpload`] | The `resource` part of multipart uploads |

pub mod document;
pub mod error;
pub mod upload;

pub use document::{Document, Linkage, Links, Meta, Relationship, Resource, ResourceIdentifier};
pub use error::{titles, ErrorDocument, ErrorObject, ErrorSource};
pub use upload::{upload_document, AttachmentUpload};
