//! Asynchronous server jobs and their result files.

use almrest::{QueryParams, RequestOptions};

use super::endpoint_path;
use crate::error::ClientError;
use crate::transport::{ApiResponse, Session};

const JOB: &str = "jobs/{}";
const JOB_DOWNLOAD: &str = "jobs/{}/actions/download/{}";

#[derive(Clone)]
pub struct Jobs {
    session: Session,
}

impl Jobs {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// `GET jobs/{jobId}`: job state and result file names.
    pub async fn get_job(
        &self,
        job_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(JOB, &[job_id]);
        self.session.get(&path, options.to_query()).await
    }

    /// `GET jobs/{jobId}/actions/download/{filename}`
    ///
    /// The body is the raw file; read it with
    /// [`ApiResponse::content`] and the headers with [`ApiResponse::header`].
    pub async fn download_job_result_file(
        &self,
        job_id: &str,
        filename: &str,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(JOB_DOWNLOAD, &[job_id, filename]);
        self.session.get(&path, QueryParams::new()).await
    }
}
