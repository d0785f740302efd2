use almrest::RequestOptions;

use crate::error::ClientError;
use crate::transport::{ApiResponse, Session};

const PROJECT_TEMPLATES: &str = "projecttemplates";

/// Templates available for [`create_project`](super::Projects::create_project).
#[derive(Clone)]
pub struct ProjectTemplates {
    session: Session,
}

impl ProjectTemplates {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// `GET projecttemplates`
    pub async fn get_project_templates(
        &self,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        self.session.get(PROJECT_TEMPLATES, options.to_query()).await
    }
}
