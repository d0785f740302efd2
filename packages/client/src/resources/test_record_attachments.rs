//! Attachments on a test record.

use almrest::{QueryParams, RequestOptions};
use serde::Serialize;

use super::{attachment_upload, endpoint_path, AttachmentFile, TestRecordRef};
use crate::error::ClientError;
use crate::transport::{ApiResponse, FilePart, Multipart, RequestBody, Session};

const ATTACHMENTS: &str = "projects/{}/testruns/{}/testrecords/{}/{}/{}/attachments";
const ATTACHMENT: &str = "projects/{}/testruns/{}/testrecords/{}/{}/{}/attachments/{}";
const ATTACHMENT_CONTENT: &str =
    "projects/{}/testruns/{}/testrecords/{}/{}/{}/attachments/{}/content";

#[derive(Clone)]
pub struct TestRecordAttachments {
    session: Session,
}

fn attachment_path(template: &str, record: TestRecordRef<'_>, attachment_id: &str) -> String {
    let [p, r, cp, c, i] = record.segments();
    endpoint_path(template, &[p, r, cp, c, i, attachment_id])
}

impl TestRecordAttachments {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub async fn get_test_record_attachments(
        &self,
        record: TestRecordRef<'_>,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(ATTACHMENTS, &record.segments());
        self.session.get(&path, options.to_query()).await
    }

    /// Upload new attachments as `testrecord_attachments` resources.
    pub async fn post_test_record_attachments(
        &self,
        record: TestRecordRef<'_>,
        files: Vec<AttachmentFile>,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(ATTACHMENTS, &record.segments());
        let body = RequestBody::Multipart(attachment_upload("testrecord_attachments", files)?);
        self.session.post(&path, body).await
    }

    pub async fn get_test_record_attachment(
        &self,
        record: TestRecordRef<'_>,
        attachment_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = attachment_path(ATTACHMENT, record, attachment_id);
        self.session.get(&path, options.to_query()).await
    }

    /// Update an attachment's metadata and, optionally, replace its content.
    pub async fn patch_test_record_attachment<B: Serialize + ?Sized>(
        &self,
        record: TestRecordRef<'_>,
        attachment_id: &str,
        resource: &B,
        file: Option<FilePart>,
    ) -> Result<ApiResponse, ClientError> {
        let path = attachment_path(ATTACHMENT, record, attachment_id);
        let body = Multipart::with_resource(resource, file.into_iter().collect())?;
        self.session.patch(&path, RequestBody::Multipart(body)).await
    }

    pub async fn delete_test_record_attachment(
        &self,
        record: TestRecordRef<'_>,
        attachment_id: &str,
    ) -> Result<ApiResponse, ClientError> {
        let path = attachment_path(ATTACHMENT, record, attachment_id);
        self.session.delete(&path, RequestBody::Empty).await
    }

    /// Raw attachment bytes.
    pub async fn get_test_record_attachment_content(
        &self,
        record: TestRecordRef<'_>,
        attachment_id: &str,
    ) -> Result<ApiResponse, ClientError> {
        let path = attachment_path(ATTACHMENT_CONTENT, record, attachment_id);
        self.session.get(&path, QueryParams::new()).await
    }
}
