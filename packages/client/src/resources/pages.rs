//! Wiki pages in a project space, and their attachments.

use almrest::{QueryParams, RequestOptions};
use serde::Serialize;

use super::{attachment_upload, endpoint_path, AttachmentFile};
use crate::error::ClientError;
use crate::transport::{ApiResponse, FilePart, Multipart, RequestBody, Session};

const PAGE: &str = "projects/{}/spaces/{}/pages/{}";
const PAGE_ATTACHMENTS: &str = "projects/{}/spaces/{}/pages/{}/attachments";
const PAGE_ATTACHMENT: &str = "projects/{}/spaces/{}/pages/{}/attachments/{}";
const PAGE_ATTACHMENT_CONTENT: &str = "projects/{}/spaces/{}/pages/{}/attachments/{}/content";

#[derive(Clone)]
pub struct Pages {
    session: Session,
}

impl Pages {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// `GET projects/{projectId}/spaces/{spaceId}/pages/{pageName}`
    pub async fn get_page(
        &self,
        project_id: &str,
        space_id: &str,
        page_name: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(PAGE, &[project_id, space_id, page_name]);
        self.session.get(&path, options.to_query()).await
    }

    pub async fn patch_page<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        space_id: &str,
        page_name: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(PAGE, &[project_id, space_id, page_name]);
        self.session.patch(&path, RequestBody::json(body)?).await
    }

    // ── Attachments ───────────────────────────────────────────────────────────

    pub async fn get_page_attachments(
        &self,
        project_id: &str,
        space_id: &str,
        page_name: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(PAGE_ATTACHMENTS, &[project_id, space_id, page_name]);
        self.session.get(&path, options.to_query()).await
    }

    /// Upload new attachments; each file is described as a `page_attachments`
    /// resource in the multipart `resource` field.
    pub async fn post_page_attachments(
        &self,
        project_id: &str,
        space_id: &str,
        page_name: &str,
        files: Vec<AttachmentFile>,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(PAGE_ATTACHMENTS, &[project_id, space_id, page_name]);
        let body = RequestBody::Multipart(attachment_upload("page_attachments", files)?);
        self.session.post(&path, body).await
    }

    pub async fn get_page_attachment(
        &self,
        project_id: &str,
        space_id: &str,
        page_name: &str,
        attachment_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(
            PAGE_ATTACHMENT,
            &[project_id, space_id, page_name, attachment_id],
        );
        self.session.get(&path, options.to_query()).await
    }

    /// Update an attachment's metadata and, optionally, replace its content.
    pub async fn patch_page_attachment<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        space_id: &str,
        page_name: &str,
        attachment_id: &str,
        resource: &B,
        file: Option<FilePart>,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(
            PAGE_ATTACHMENT,
            &[project_id, space_id, page_name, attachment_id],
        );
        let body = Multipart::with_resource(resource, file.into_iter().collect())?;
        self.session.patch(&path, RequestBody::Multipart(body)).await
    }

    /// Raw attachment bytes.
    pub async fn get_page_attachment_content(
        &self,
        project_id: &str,
        space_id: &str,
        page_name: &str,
        attachment_id: &str,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(
            PAGE_ATTACHMENT_CONTENT,
            &[project_id, space_id, page_name, attachment_id],
        );
        self.session.get(&path, QueryParams::new()).await
    }
}
