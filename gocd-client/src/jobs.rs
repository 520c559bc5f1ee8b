//! Job-related API endpoints

use gocd_core::domain::job::{JobHistory, ScheduledJob};
use gocd_core::wire::null_default;
use reqwest::Method;
use serde::Deserialize;

use crate::GoCdClient;
use crate::error::{ClientError, Result};
use crate::versions::{Accept, Endpoint};
use crate::xml;

/// Body of the job history endpoint
#[derive(Debug, Deserialize)]
struct JobHistoryPage {
    #[serde(default, deserialize_with = "null_default")]
    jobs: Vec<JobHistory>,
}

impl GoCdClient {
    /// List job instances that are scheduled but not yet assigned to an agent
    ///
    /// This endpoint only speaks XML.
    pub async fn list_scheduled_jobs(&self) -> Result<Vec<ScheduledJob>> {
        let endpoint = Endpoint::new("/jobs/scheduled.xml", Accept::Xml);
        let response = self.request(Method::GET, &endpoint).send().await?;
        let raw = self.read_body(response).await?;

        xml::decode_scheduled_jobs(&raw.body).map_err(|e| ClientError::parse("scheduled jobs", e))
    }

    /// List past instances of a job, most recent first
    ///
    /// # Arguments
    /// * `pipeline` - Pipeline name
    /// * `stage` - Stage name
    /// * `job` - Job name
    /// * `offset` - Number of instances to skip
    ///
    /// # Returns
    /// Past instances of the job, most recent first
    ///
    /// # Example
    /// ```no_run
    /// # use gocd_client::GoCdClient;
    /// # async fn example() -> gocd_client::Result<()> {
    /// let client = GoCdClient::new("http://localhost:8153", "admin", "badger");
    /// let runs = client.get_job_history("up42", "up42_stage", "up42_job", 0).await?;
    /// for run in runs {
    ///     println!("{} #{}: {}", run.name, run.pipeline_counter, run.result);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_job_history(
        &self,
        pipeline: &str,
        stage: &str,
        job: &str,
        offset: u64,
    ) -> Result<Vec<JobHistory>> {
        // Versioned Accept headers make this endpoint answer 404
        let endpoint = Endpoint::new(
            format!("/jobs/{pipeline}/{stage}/{job}/history/{offset}"),
            Accept::Json,
        );
        let response = self.request(Method::GET, &endpoint).send().await?;
        let page: JobHistoryPage = self.handle_response(response, "job history").await?;

        Ok(page.jobs)
    }
}
