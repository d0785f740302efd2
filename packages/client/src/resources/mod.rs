//! Endpoint wrappers, one module per resource family.
//!
//! Every method follows the same three steps: build the path from a fixed
//! template, merge the caller's [`RequestOptions`](almrest::RequestOptions)
//! over the default field catalog (reads only), and make one call through the
//! injected [`Session`](crate::transport::Session). The response comes back
//! exactly as the transport returned it.

pub mod enumerations;
pub mod icons;
pub mod jobs;
pub mod linked_work_items;
pub mod pages;
pub mod plans;
pub mod project_templates;
pub mod projects;
pub mod revisions;
pub mod test_record_attachments;
pub mod test_records;
pub mod test_runs;
pub mod users;
pub mod work_items;

pub use enumerations::Enumerations;
pub use icons::Icons;
pub use jobs::Jobs;
pub use linked_work_items::{LinkRef, LinkedWorkItems};
pub use pages::Pages;
pub use plans::Plans;
pub use project_templates::ProjectTemplates;
pub use projects::Projects;
pub use revisions::Revisions;
pub use test_record_attachments::TestRecordAttachments;
pub use test_records::{TestRecordRef, TestRecords};
pub use test_runs::TestRuns;
pub use users::Users;
pub use work_items::WorkItems;

use almrest::{build_path, placeholder_count};
use almrest_api::{upload_document, AttachmentUpload};

use crate::error::ClientError;
use crate::transport::{FilePart, Multipart};

/// One file for an attachment upload.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentFile {
    pub file: FilePart,
    pub title: Option<String>,
}

impl AttachmentFile {
    pub fn new(file: FilePart) -> Self {
        Self { file, title: None }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl From<FilePart> for AttachmentFile {
    fn from(file: FilePart) -> Self {
        Self::new(file)
    }
}

/// Fill an endpoint template. Every template takes exactly as many
/// identifiers as it has `{}` placeholders; debug builds check this.
pub(crate) fn endpoint_path(template: &str, ids: &[&str]) -> String {
    debug_assert_eq!(
        placeholder_count(template),
        ids.len(),
        "identifier count for {template}"
    );
    build_path(template, ids)
}

/// Multipart body for a new-attachment upload: one `kind` resource per file,
/// in file order.
pub(crate) fn attachment_upload(
    kind: &str,
    files: Vec<AttachmentFile>,
) -> Result<Multipart, ClientError> {
    let uploads: Vec<AttachmentUpload> = files
        .iter()
        .map(|f| {
            let upload = AttachmentUpload::new(kind, f.file.file_name.as_str());
            match f.title {
                Some(ref title) => upload.with_title(title.as_str()),
                None => upload,
            }
        })
        .collect();
    let parts = files.into_iter().map(|f| f.file).collect();
    Multipart::with_resource(&upload_document(&uploads), parts)
}
