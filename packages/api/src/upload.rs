//! Metadata for multipart attachment uploads.
//!
//! Attachment endpoints take a `multipart/form-data` body with two kinds of
//! field: one `resource` field holding a JSON:API document that describes the
//! files, and one `files` field per file with the raw bytes. The n-th entry
//! of `data` describes the n-th file.

use crate::document::{Document, Resource};

/// Description of one file in an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentUpload {
    /// Collection the attachment belongs to, e.g. `testrecord_attachments`.
    pub kind: String,

    /// File name as stored by the server.
    pub file_name: String,

    pub title: Option<String>,
}

impl AttachmentUpload {
    pub fn new(kind: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            file_name: file_name.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn to_resource(&self) -> Resource {
        let res = Resource::new(self.kind.as_str()).attribute("fileName", self.file_name.as_str());
        match self.title {
            Some(ref title) => res.attribute("title", title.as_str()),
            None => res,
        }
    }
}

/// The `resource` document for a set of uploads, in file order.
pub fn upload_document(uploads: &[AttachmentUpload]) -> Document<Vec<Resource>> {
    Document::new(uploads.iter().map(AttachmentUpload::to_resource).collect())
}
