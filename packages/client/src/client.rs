//! [`AlmClient`]: one handle, one shared session, every resource family.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::ReqwestTransport;
use crate::resources::{
    Enumerations, Icons, Jobs, LinkedWorkItems, Pages, Plans, ProjectTemplates, Projects,
    Revisions, TestRecordAttachments, TestRecords, TestRuns, Users, WorkItems,
};
use crate::transport::{Session, Transport};

/// Entry point to the API.
///
/// Cloning is cheap; every clone and every resource handle shares the same
/// transport.
#[derive(Clone)]
pub struct AlmClient {
    session: Session,
}

impl AlmClient {
    /// A client over any transport, e.g. a [`MockTransport`](crate::mock::MockTransport).
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            session: Session::new(transport),
        }
    }

    /// A client over HTTP, configured from `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::new(Arc::new(transport)))
    }

    /// A client over HTTP, configured from `ALM_*` environment variables.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_config(&ClientConfig::from_env()?)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn enumerations(&self) -> Enumerations {
        Enumerations::new(self.session.clone())
    }

    pub fn icons(&self) -> Icons {
        Icons::new(self.session.clone())
    }

    pub fn jobs(&self) -> Jobs {
        Jobs::new(self.session.clone())
    }

    pub fn linked_work_items(&self) -> LinkedWorkItems {
        LinkedWorkItems::new(self.session.clone())
    }

    pub fn pages(&self) -> Pages {
        Pages::new(self.session.clone())
    }

    pub fn plans(&self) -> Plans {
        Plans::new(self.session.clone())
    }

    pub fn project_templates(&self) -> ProjectTemplates {
        ProjectTemplates::new(self.session.clone())
    }

    pub fn projects(&self) -> Projects {
        Projects::new(self.session.clone())
    }

    pub fn revisions(&self) -> Revisions {
        Revisions::new(self.session.clone())
    }

    pub fn test_record_attachments(&self) -> TestRecordAttachments {
        TestRecordAttachments::new(self.session.clone())
    }

    pub fn test_records(&self) -> TestRecords {
        TestRecords::new(self.session.clone())
    }

    pub fn test_runs(&self) -> TestRuns {
        TestRuns::new(self.session.clone())
    }

    pub fn users(&self) -> Users {
        Users::new(self.session.clone())
    }

    pub fn work_items(&self) -> WorkItems {
        WorkItems::new(self.session.clone())
    }
}
