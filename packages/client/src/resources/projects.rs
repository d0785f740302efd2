//! Projects and project-level actions.
//!
//! Creating and moving projects run as server jobs: the response carries a
//! job resource that can be followed with [`Jobs::get_job`](super::Jobs::get_job).

use almrest::RequestOptions;
use serde::Serialize;

use super::endpoint_path;
use crate::error::ClientError;
use crate::transport::{ApiResponse, RequestBody, Session};

const PROJECTS: &str = "projects";
const PROJECT: &str = "projects/{}";
const CREATE_PROJECT: &str = "projects/actions/createProject";
const MARK_PROJECT: &str = "projects/{}/actions/markProject";
const UNMARK_PROJECT: &str = "projects/{}/actions/unmarkProject";
const MOVE_PROJECT: &str = "projects/{}/actions/moveProject";

#[derive(Clone)]
pub struct Projects {
    session: Session,
}

impl Projects {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// `GET projects`
    pub async fn get_projects(&self, options: &RequestOptions) -> Result<ApiResponse, ClientError> {
        self.session.get(PROJECTS, options.to_query()).await
    }

    /// `GET projects/{projectId}`
    pub async fn get_project(
        &self,
        project_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(PROJECT, &[project_id]);
        self.session.get(&path, options.to_query()).await
    }

    pub async fn patch_project<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(PROJECT, &[project_id]);
        self.session.patch(&path, RequestBody::json(body)?).await
    }

    pub async fn delete_project(&self, project_id: &str) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(PROJECT, &[project_id]);
        self.session.delete(&path, RequestBody::Empty).await
    }

    // ── Actions ───────────────────────────────────────────────────────────────

    /// `POST projects/actions/createProject`
    ///
    /// The body names the new project's id, location and template, e.g.
    /// `{"projectId": "P", "location": "/P", "templateId": "agile"}`.
    pub async fn create_project<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        self.session
            .post(CREATE_PROJECT, RequestBody::json(body)?)
            .await
    }

    pub async fn mark_project<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(MARK_PROJECT, &[project_id]);
        self.session.post(&path, RequestBody::json(body)?).await
    }

    pub async fn unmark_project(&self, project_id: &str) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(UNMARK_PROJECT, &[project_id]);
        self.session.post(&path, RequestBody::Empty).await
    }

    pub async fn move_project<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(MOVE_PROJECT, &[project_id]);
        self.session.post(&path, RequestBody::json(body)?).await
    }
}
