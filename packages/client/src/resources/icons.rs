//! Enumeration icons: built-in defaults, global icons, and project icons.
//!
//! Icon uploads are multipart: the `resource` field holds one `icons`
//! resource per uploaded file.

use almrest::RequestOptions;
use almrest_api::{Document, Resource};

use super::endpoint_path;
use crate::error::ClientError;
use crate::transport::{ApiResponse, FilePart, Multipart, RequestBody, Session};

const DEFAULT_ICONS: &str = "enumerations/defaulticons";
const DEFAULT_ICON: &str = "enumerations/defaulticons/{}";
const GLOBAL_ICONS: &str = "enumerations/icons";
const GLOBAL_ICON: &str = "enumerations/icons/{}";
const PROJECT_ICONS: &str = "projects/{}/enumerations/icons";
const PROJECT_ICON: &str = "projects/{}/enumerations/icons/{}";

#[derive(Clone)]
pub struct Icons {
    session: Session,
}

/// Multipart body for an icon upload.
fn icon_upload(files: Vec<FilePart>) -> Result<Multipart, ClientError> {
    let resources: Vec<Resource> = files.iter().map(|_| Resource::new("icons")).collect();
    Multipart::with_resource(&Document::new(resources), files)
}

impl Icons {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// `GET enumerations/defaulticons`
    pub async fn get_default_icons(
        &self,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        self.session.get(DEFAULT_ICONS, options.to_query()).await
    }

    /// `GET enumerations/defaulticons/{iconId}`
    pub async fn get_default_icon(
        &self,
        icon_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(DEFAULT_ICON, &[icon_id]);
        self.session.get(&path, options.to_query()).await
    }

    /// `GET enumerations/icons`
    pub async fn get_global_icons(
        &self,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        self.session.get(GLOBAL_ICONS, options.to_query()).await
    }

    /// `POST enumerations/icons` (multipart)
    pub async fn post_global_icons(&self, files: Vec<FilePart>) -> Result<ApiResponse, ClientError> {
        let body = RequestBody::Multipart(icon_upload(files)?);
        self.session.post(GLOBAL_ICONS, body).await
    }

    /// `GET enumerations/icons/{iconId}`
    pub async fn get_global_icon(
        &self,
        icon_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(GLOBAL_ICON, &[icon_id]);
        self.session.get(&path, options.to_query()).await
    }

    /// `GET projects/{projectId}/enumerations/icons`
    pub async fn get_icons(
        &self,
        project_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(PROJECT_ICONS, &[project_id]);
        self.session.get(&path, options.to_query()).await
    }

    /// `POST projects/{projectId}/enumerations/icons` (multipart)
    pub async fn post_icons(
        &self,
        project_id: &str,
        files: Vec<FilePart>,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(PROJECT_ICONS, &[project_id]);
        let body = RequestBody::Multipart(icon_upload(files)?);
        self.session.post(&path, body).await
    }

    /// `GET projects/{projectId}/enumerations/icons/{iconId}`
    pub async fn get_icon(
        &self,
        project_id: &str,
        icon_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(PROJECT_ICON, &[project_id, icon_id]);
        self.session.get(&path, options.to_query()).await
    }
}
