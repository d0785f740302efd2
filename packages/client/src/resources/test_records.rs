//! Test records of a test run.
//!
//! A single record is addressed by the test case it executes and the
//! iteration: `.../testrecords/{testCaseProjectId}/{testCaseId}/{iteration}`.

use almrest::RequestOptions;
use serde::Serialize;

use super::endpoint_path;
use crate::error::ClientError;
use crate::transport::{ApiResponse, RequestBody, Session};

const TEST_RECORDS: &str = "projects/{}/testruns/{}/testrecords";
const TEST_RECORD: &str = "projects/{}/testruns/{}/testrecords/{}/{}/{}";

/// Identifies one test record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestRecordRef<'a> {
    pub project_id: &'a str,
    pub test_run_id: &'a str,
    pub test_case_project_id: &'a str,
    pub test_case_id: &'a str,
    pub iteration: &'a str,
}

impl<'a> TestRecordRef<'a> {
    pub(crate) fn segments(&self) -> [&'a str; 5] {
        [
            self.project_id,
            self.test_run_id,
            self.test_case_project_id,
            self.test_case_id,
            self.iteration,
        ]
    }
}

#[derive(Clone)]
pub struct TestRecords {
    session: Session,
}

impl TestRecords {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// `GET projects/{projectId}/testruns/{testRunId}/testrecords`
    pub async fn get_test_records(
        &self,
        project_id: &str,
        test_run_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(TEST_RECORDS, &[project_id, test_run_id]);
        self.session.get(&path, options.to_query()).await
    }

    pub async fn post_test_records<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        test_run_id: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(TEST_RECORDS, &[project_id, test_run_id]);
        self.session.post(&path, RequestBody::json(body)?).await
    }

    pub async fn patch_test_records<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        test_run_id: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(TEST_RECORDS, &[project_id, test_run_id]);
        self.session.patch(&path, RequestBody::json(body)?).await
    }

    pub async fn get_test_record(
        &self,
        record: TestRecordRef<'_>,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(TEST_RECORD, &record.segments());
        self.session.get(&path, options.to_query()).await
    }

    pub async fn patch_test_record<B: Serialize + ?Sized>(
        &self,
        record: TestRecordRef<'_>,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(TEST_RECORD, &record.segments());
        self.session.patch(&path, RequestBody::json(body)?).await
    }

    pub async fn delete_test_record(
        &self,
        record: TestRecordRef<'_>,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(TEST_RECORD, &record.segments());
        self.session.delete(&path, RequestBody::Empty).await
    }
}
