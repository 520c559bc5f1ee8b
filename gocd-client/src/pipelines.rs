//! Pipeline-related API endpoints

use gocd_core::domain::common::SimpleMessage;
use gocd_core::domain::pipeline::{
    PipelineGroup, PipelineHistoryPage, PipelineInstance, PipelineStatus,
};
use gocd_core::domain::pipeline_config::PipelineConfig;
use gocd_core::dto::pipeline::PauseRequest;
use reqwest::Method;
use reqwest::header::ETAG;

use crate::GoCdClient;
use crate::error::{ClientError, Faults, Result};
use crate::versions::{Accept, Endpoint};

/// A pipeline configuration together with its cache token
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfigResponse {
    pub config: PipelineConfig,
    /// Verbatim `ETag` response header, for `If-Match` on later updates
    pub etag: Option<String>,
}

impl GoCdClient {
    // =============================================================================
    // Pipeline Query
    // =============================================================================

    /// List pipeline groups with their pipelines, stages and materials
    pub async fn list_pipeline_groups(&self) -> Result<Vec<PipelineGroup>> {
        let endpoint = self.versions.pipeline_groups();
        let response = self.request(Method::GET, &endpoint).send().await?;

        self.handle_collection(response, "groups").await
    }

    /// Get one run of a pipeline
    ///
    /// # Arguments
    /// * `name` - The pipeline name
    /// * `counter` - The run counter
    pub async fn get_pipeline_instance(&self, name: &str, counter: u64) -> Result<PipelineInstance> {
        let endpoint = Endpoint::new(format!("/pipelines/{name}/instance/{counter}"), Accept::Json);
        let response = self.request(Method::GET, &endpoint).send().await?;

        self.handle_response(response, "pipeline instance").await
    }

    /// Get a page of pipeline runs, most recent first
    ///
    /// # Arguments
    /// * `name` - The pipeline name
    /// * `offset` - Number of runs to skip
    pub async fn get_pipeline_history_page(
        &self,
        name: &str,
        offset: u64,
    ) -> Result<PipelineHistoryPage> {
        let endpoint = Endpoint::new(format!("/pipelines/{name}/history/{offset}"), Accept::Json);
        let response = self.request(Method::GET, &endpoint).send().await?;

        self.handle_response(response, "pipeline history").await
    }

    /// Get the pause, lock and schedulability state of a pipeline
    pub async fn get_pipeline_status(&self, name: &str) -> Result<PipelineStatus> {
        let endpoint = Endpoint::new(
            format!("/pipelines/{name}/status"),
            self.versions.pipeline_operations_accept(),
        );
        let response = self.request(Method::GET, &endpoint).send().await?;

        self.handle_response(response, "pipeline status").await
    }

    /// Get the configuration of a pipeline and its cache token
    ///
    /// # Arguments
    /// * `name` - The pipeline name
    ///
    /// # Returns
    /// The configuration and the verbatim `ETag` header, if the server sent one
    pub async fn get_pipeline_config(&self, name: &str) -> Result<PipelineConfigResponse> {
        let endpoint = Endpoint::new(
            format!("/admin/pipelines/{name}"),
            self.versions.pipeline_config_accept(),
        );
        let response = self.request(Method::GET, &endpoint).send().await?;
        let raw = self.read_body(response).await?;

        let mut faults = Faults::new();
        let etag = match raw.headers.get(ETAG).map(|value| value.to_str()) {
            None => None,
            Some(Ok(value)) => Some(value.to_string()),
            Some(Err(e)) => {
                faults.push(ClientError::parse("ETag header", e));
                None
            }
        };
        let config = match serde_json::from_str(&raw.body) {
            Ok(config) => config,
            Err(e) => {
                faults.push(ClientError::parse("pipeline config", e));
                PipelineConfig::default()
            }
        };

        faults.into_result(PipelineConfigResponse { config, etag })
    }

    // =============================================================================
    // Pipeline Operations
    // =============================================================================

    /// Pause a pipeline
    ///
    /// # Arguments
    /// * `name` - The pipeline name
    /// * `cause` - Reason recorded with the pause
    ///
    /// # Returns
    /// The server's acknowledgement
    ///
    /// # Example
    /// ```no_run
    /// # use gocd_client::GoCdClient;
    /// # async fn example() -> gocd_client::Result<()> {
    /// let client = GoCdClient::new("http://localhost:8153", "admin", "badger");
    /// let reply = client.pause_pipeline("up42", "Investigating build failures").await?;
    /// println!("{}", reply.message);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn pause_pipeline(&self, name: &str, cause: &str) -> Result<SimpleMessage> {
        let endpoint = self.pipeline_operation(name, "pause");
        let response = self
            .confirmed_request(Method::POST, &endpoint)
            .json(&PauseRequest {
                pause_cause: cause.to_string(),
            })
            .send()
            .await?;

        self.handle_response(response, "pause acknowledgement").await
    }

    /// Unpause a pipeline
    ///
    /// # Arguments
    /// * `name` - The pipeline name
    ///
    /// # Returns
    /// The server's acknowledgement
    pub async fn unpause_pipeline(&self, name: &str) -> Result<SimpleMessage> {
        let endpoint = self.pipeline_operation(name, "unpause");
        let response = self.confirmed_request(Method::POST, &endpoint).send().await?;

        self.handle_response(response, "unpause acknowledgement").await
    }

    /// Release the lock on a pipeline
    ///
    /// Only possible while no instance of the pipeline is running.
    ///
    /// # Arguments
    /// * `name` - The pipeline name
    ///
    /// # Example
    /// ```no_run
    /// # use gocd_client::GoCdClient;
    /// # async fn example() -> gocd_client::Result<()> {
    /// let client = GoCdClient::new("http://localhost:8153", "admin", "badger");
    /// match client.unlock_pipeline("up42").await {
    ///     Ok(reply) => println!("{}", reply.message),
    ///     Err(e) if e.status() == Some(409) => println!("pipeline is not locked"),
    ///     Err(e) => return Err(e),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn unlock_pipeline(&self, name: &str) -> Result<SimpleMessage> {
        let endpoint = self.pipeline_operation(name, "unlock");
        let response = self.confirmed_request(Method::POST, &endpoint).send().await?;

        self.handle_response(response, "unlock acknowledgement").await
    }

    fn pipeline_operation(&self, name: &str, operation: &str) -> Endpoint {
        Endpoint::new(
            format!("/pipelines/{name}/{operation}"),
            self.versions.pipeline_operations_accept(),
        )
    }
}
