use almrest::RequestOptions;
use serde::Serialize;

use super::endpoint_path;
use crate::error::ClientError;
use crate::transport::{ApiResponse, RequestBody, Session};

const TEST_RUNS: &str = "projects/{}/testruns";
const TEST_RUN: &str = "projects/{}/testruns/{}";

/// Test runs of a project. Set [`RequestOptions::templates`] to list test run
/// templates instead.
#[derive(Clone)]
pub struct TestRuns {
    session: Session,
}

impl TestRuns {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// `GET projects/{projectId}/testruns`
    pub async fn get_test_runs(
        &self,
        project_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(TEST_RUNS, &[project_id]);
        self.session.get(&path, options.to_query()).await
    }

    pub async fn post_test_runs<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(TEST_RUNS, &[project_id]);
        self.session.post(&path, RequestBody::json(body)?).await
    }

    pub async fn patch_test_runs<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(TEST_RUNS, &[project_id]);
        self.session.patch(&path, RequestBody::json(body)?).await
    }

    pub async fn delete_test_runs<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(TEST_RUNS, &[project_id]);
        self.session.delete(&path, RequestBody::json(body)?).await
    }

    /// `GET projects/{projectId}/testruns/{testRunId}`
    pub async fn get_test_run(
        &self,
        project_id: &str,
        test_run_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(TEST_RUN, &[project_id, test_run_id]);
        self.session.get(&path, options.to_query()).await
    }

    pub async fn patch_test_run<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        test_run_id: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(TEST_RUN, &[project_id, test_run_id]);
        self.session.patch(&path, RequestBody::json(body)?).await
    }

    pub async fn delete_test_run(
        &self,
        project_id: &str,
        test_run_id: &str,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(TEST_RUN, &[project_id, test_run_id]);
        self.session.delete(&path, RequestBody::Empty).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::error_response;
    use crate::resources::test_support::*;
    use crate::transport::Method;
    use serde_json::json;

    #[tokio::test]
    async fn collection_verbs() {
        let (mock, session) = mock_session(vec![
            ok(json!({ "data": [] })),
            ApiResponse::new(201),
            ApiResponse::new(204),
            ApiResponse::new(204),
        ]);
        let runs = TestRuns::new(session);
        let body = json!({ "data": [ { "type": "testruns", "id": "P/R1" } ] });

        runs.get_test_runs("P", &RequestOptions::new().templates(true))
            .await
            .unwrap();
        runs.post_test_runs("P", &body).await.unwrap();
        runs.patch_test_runs("P", &body).await.unwrap();
        runs.delete_test_runs("P", &body).await.unwrap();

        let reqs = mock.requests();
        assert_eq!(
            reqs.iter().map(|r| r.method).collect::<Vec<_>>(),
            vec![Method::Get, Method::Post, Method::Patch, Method::Delete]
        );
        assert!(reqs.iter().all(|r| r.path == "projects/P/testruns"));
        assert_eq!(param(&reqs[0].params, "templates").as_deref(), Some("true"));
        assert_eq!(reqs[0].params.len(), 39);
        assert!(reqs[1..].iter().all(|r| r.body.as_json() == Some(&body)));
    }

    #[tokio::test]
    async fn single_run_verbs() {
        let (mock, session) = mock_session(vec![
            ok(json!({ "data": { "type": "testruns", "id": "P/R1" } })),
            ApiResponse::new(204),
            ApiResponse::new(204),
        ]);
        let runs = TestRuns::new(session);

        runs.get_test_run("P", "R1", &RequestOptions::default()).await.unwrap();
        runs.patch_test_run("P", "R1", &json!({ "data": { "attributes": { "status": "finished" } } }))
            .await
            .unwrap();
        runs.delete_test_run("P", "R1").await.unwrap();

        let reqs = mock.requests();
        assert!(reqs.iter().all(|r| r.path == "projects/P/testruns/R1"));
        assert_default_params(&reqs[0].params);
        assert_eq!(reqs[2].body, RequestBody::Empty);
    }

    #[tokio::test]
    async fn conflict_passes_through() {
        let (_mock, session) =
            mock_session(vec![error_response(409, "Conflict", "test run already exists")]);
        let r = TestRuns::new(session)
            .post_test_runs("P", &json!({ "data": [] }))
            .await
            .unwrap();
        assert_eq!(r.status_code(), 409);
    }
}
