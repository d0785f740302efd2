//! Enumerations, project-scoped and global.
//!
//! A single enumeration is addressed by three segments after the scope:
//! `{enumContext}/{enumName}/{targetType}`.

use almrest::RequestOptions;
use serde::Serialize;

use super::endpoint_path;
use crate::error::ClientError;
use crate::transport::{ApiResponse, RequestBody, Session};

const PROJECT_ENUMERATIONS: &str = "projects/{}/enumerations";
const PROJECT_ENUMERATION: &str = "projects/{}/enumerations/{}/{}/{}";
const GLOBAL_ENUMERATIONS: &str = "enumerations";
const GLOBAL_ENUMERATION: &str = "enumerations/{}/{}/{}";

#[derive(Clone)]
pub struct Enumerations {
    session: Session,
}

impl Enumerations {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    // ── Project scope ─────────────────────────────────────────────────────────

    /// `GET projects/{projectId}/enumerations`
    pub async fn get_enumerations(
        &self,
        project_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(PROJECT_ENUMERATIONS, &[project_id]);
        self.session.get(&path, options.to_query()).await
    }

    /// `POST projects/{projectId}/enumerations`
    pub async fn post_enumerations<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(PROJECT_ENUMERATIONS, &[project_id]);
        self.session.post(&path, RequestBody::json(body)?).await
    }

    /// `GET projects/{projectId}/enumerations/{enumContext}/{enumName}/{targetType}`
    pub async fn get_enumeration(
        &self,
        project_id: &str,
        enum_context: &str,
        enum_name: &str,
        target_type: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(
            PROJECT_ENUMERATION,
            &[project_id, enum_context, enum_name, target_type],
        );
        self.session.get(&path, options.to_query()).await
    }

    /// `PATCH projects/{projectId}/enumerations/{enumContext}/{enumName}/{targetType}`
    pub async fn patch_enumeration<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        enum_context: &str,
        enum_name: &str,
        target_type: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(
            PROJECT_ENUMERATION,
            &[project_id, enum_context, enum_name, target_type],
        );
        self.session.patch(&path, RequestBody::json(body)?).await
    }

    /// `DELETE projects/{projectId}/enumerations/{enumContext}/{enumName}/{targetType}`
    pub async fn delete_enumeration(
        &self,
        project_id: &str,
        enum_context: &str,
        enum_name: &str,
        target_type: &str,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(
            PROJECT_ENUMERATION,
            &[project_id, enum_context, enum_name, target_type],
        );
        self.session.delete(&path, RequestBody::Empty).await
    }

    // ── Global scope ──────────────────────────────────────────────────────────

    /// `GET enumerations`
    pub async fn get_global_enumerations(
        &self,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        self.session.get(GLOBAL_ENUMERATIONS, options.to_query()).await
    }

    /// `POST enumerations`
    pub async fn post_global_enumerations<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        self.session
            .post(GLOBAL_ENUMERATIONS, RequestBody::json(body)?)
            .await
    }

    /// `GET enumerations/{enumContext}/{enumName}/{targetType}`
    pub async fn get_global_enumeration(
        &self,
        enum_context: &str,
        enum_name: &str,
        target_type: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(GLOBAL_ENUMERATION, &[enum_context, enum_name, target_type]);
        self.session.get(&path, options.to_query()).await
    }

    /// `PATCH enumerations/{enumContext}/{enumName}/{targetType}`
    pub async fn patch_global_enumeration<B: Serialize + ?Sized>(
        &self,
        enum_context: &str,
        enum_name: &str,
        target_type: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(GLOBAL_ENUMERATION, &[enum_context, enum_name, target_type]);
        self.session.patch(&path, RequestBody::json(body)?).await
    }

    /// `DELETE enumerations/{enumContext}/{enumName}/{targetType}`
    pub async fn delete_global_enumeration(
        &self,
        enum_context: &str,
        enum_name: &str,
        target_type: &str,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(GLOBAL_ENUMERATION, &[enum_context, enum_name, target_type]);
        self.session.delete(&path, RequestBody::Empty).await
    }
}
