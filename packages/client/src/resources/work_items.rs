//! Work items, across all projects or within one.

use almrest::RequestOptions;
use serde::Serialize;

use super::endpoint_path;
use crate::error::ClientError;
use crate::transport::{ApiResponse, RequestBody, Session};

const ALL_WORK_ITEMS: &str = "all/workitems";
const WORK_ITEMS: &str = "projects/{}/workitems";
const WORK_ITEM: &str = "projects/{}/workitems/{}";

#[derive(Clone)]
pub struct WorkItems {
    session: Session,
}

impl WorkItems {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// `GET all/workitems`, usually narrowed with [`RequestOptions::query`].
    pub async fn get_all_work_items(
        &self,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        self.session.get(ALL_WORK_ITEMS, options.to_query()).await
    }

    /// `GET projects/{projectId}/workitems`
    pub async fn get_work_items(
        &self,
        project_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(WORK_ITEMS, &[project_id]);
        self.session.get(&path, options.to_query()).await
    }

    pub async fn post_work_items<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(WORK_ITEMS, &[project_id]);
        self.session.post(&path, RequestBody::json(body)?).await
    }

    pub async fn patch_work_items<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(WORK_ITEMS, &[project_id]);
        self.session.patch(&path, RequestBody::json(body)?).await
    }

    /// `DELETE projects/{projectId}/workitems`. The body lists the items.
    pub async fn delete_work_items<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(WORK_ITEMS, &[project_id]);
        self.session.delete(&path, RequestBody::json(body)?).await
    }

    /// `GET projects/{projectId}/workitems/{workItemId}`
    pub async fn get_work_item(
        &self,
        project_id: &str,
        work_item_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(WORK_ITEM, &[project_id, work_item_id]);
        self.session.get(&path, options.to_query()).await
    }

    pub async fn patch_work_item<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        work_item_id: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(WORK_ITEM, &[project_id, work_item_id]);
        self.session.patch(&path, RequestBody::json(body)?).await
    }

    pub async fn delete_work_item(
        &self,
        project_id: &str,
        work_item_id: &str,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(WORK_ITEM, &[project_id, work_item_id]);
        self.session.delete(&path, RequestBody::Empty).await
    }
}
