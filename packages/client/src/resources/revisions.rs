//! Repository revisions.

use almrest::RequestOptions;

use super::endpoint_path;
use crate::error::ClientError;
use crate::transport::{ApiResponse, Session};

const REVISIONS: &str = "revisions";
const REVISION: &str = "revisions/{}";

#[derive(Clone)]
pub struct Revisions {
    session: Session,
}

impl Revisions {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// `GET revisions`
    pub async fn get_revisions(
        &self,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        self.session.get(REVISIONS, options.to_query()).await
    }

    /// `GET revisions/{revision}`
    pub async fn get_revision(
        &self,
        revision: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(REVISION, &[revision]);
        self.session.get(&path, options.to_query()).await
    }
}
