//! Links from one work item to others.
//!
//! A single link is identified by role and target:
//! `.../linkedworkitems/{roleId}/{targetProjectId}/{linkedWorkItemId}`.

use almrest::RequestOptions;
use serde::Serialize;

use super::endpoint_path;
use crate::error::ClientError;
use crate::transport::{ApiResponse, RequestBody, Session};

const LINKS: &str = "projects/{}/workitems/{}/linkedworkitems";
const LINK: &str = "projects/{}/workitems/{}/linkedworkitems/{}/{}/{}";

/// Identifies one link leaving a work item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkRef<'a> {
    pub project_id: &'a str,
    pub work_item_id: &'a str,
    pub role_id: &'a str,
    pub target_project_id: &'a str,
    pub linked_work_item_id: &'a str,
}

impl<'a> LinkRef<'a> {
    fn segments(&self) -> [&'a str; 5] {
        [
            self.project_id,
            self.work_item_id,
            self.role_id,
            self.target_project_id,
            self.linked_work_item_id,
        ]
    }
}

#[derive(Clone)]
pub struct LinkedWorkItems {
    session: Session,
}

impl LinkedWorkItems {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// `GET projects/{projectId}/workitems/{workItemId}/linkedworkitems`
    pub async fn get_linked_work_items(
        &self,
        project_id: &str,
        work_item_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(LINKS, &[project_id, work_item_id]);
        self.session.get(&path, options.to_query()).await
    }

    /// `POST projects/{projectId}/workitems/{workItemId}/linkedworkitems`
    pub async fn post_linked_work_items<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        work_item_id: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(LINKS, &[project_id, work_item_id]);
        self.session.post(&path, RequestBody::json(body)?).await
    }

    /// `DELETE projects/{projectId}/workitems/{workItemId}/linkedworkitems`
    pub async fn delete_linked_work_items<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        work_item_id: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(LINKS, &[project_id, work_item_id]);
        self.session.delete(&path, RequestBody::json(body)?).await
    }

    pub async fn get_linked_work_item(
        &self,
        link: LinkRef<'_>,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(LINK, &link.segments());
        self.session.get(&path, options.to_query()).await
    }

    pub async fn patch_linked_work_item<B: Serialize + ?Sized>(
        &self,
        link: LinkRef<'_>,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(LINK, &link.segments());
        self.session.patch(&path, RequestBody::json(body)?).await
    }

    pub async fn delete_linked_work_item(
        &self,
        link: LinkRef<'_>,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(LINK, &link.segments());
        self.session.delete(&path, RequestBody::Empty).await
    }
}
