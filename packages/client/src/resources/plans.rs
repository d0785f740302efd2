//! Plans under `projects/{projectId}/plans[/{planId}]`.

use almrest::RequestOptions;
use serde::Serialize;

use super::endpoint_path;
use crate::error::ClientError;
use crate::transport::{ApiResponse, RequestBody, Session};

const PLANS: &str = "projects/{}/plans";
const PLAN: &str = "projects/{}/plans/{}";

/// Plan endpoints. Set [`RequestOptions::templates`] to list plan templates
/// instead of plans.
#[derive(Clone)]
pub struct Plans {
    session: Session,
}

impl Plans {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// `GET projects/{projectId}/plans`
    pub async fn get_plans(
        &self,
        project_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(PLANS, &[project_id]);
        self.session.get(&path, options.to_query()).await
    }

    /// `POST projects/{projectId}/plans`
    pub async fn post_plans<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(PLANS, &[project_id]);
        self.session.post(&path, RequestBody::json(body)?).await
    }

    /// `DELETE projects/{projectId}/plans`. The body lists the plans to delete.
    pub async fn delete_plans<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(PLANS, &[project_id]);
        self.session.delete(&path, RequestBody::json(body)?).await
    }

    /// `GET projects/{projectId}/plans/{planId}`
    pub async fn get_plan(
        &self,
        project_id: &str,
        plan_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(PLAN, &[project_id, plan_id]);
        self.session.get(&path, options.to_query()).await
    }

    /// `PATCH projects/{projectId}/plans/{planId}`
    pub async fn patch_plan<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        plan_id: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(PLAN, &[project_id, plan_id]);
        self.session.patch(&path, RequestBody::json(body)?).await
    }

    /// `DELETE projects/{projectId}/plans/{planId}`
    pub async fn delete_plan(
        &self,
        project_id: &str,
        plan_id: &str,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(PLAN, &[project_id, plan_id]);
        self.session.delete(&path, RequestBody::Empty).await
    }
}
