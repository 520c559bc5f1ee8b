//! Client trait
//!
//! Every operation of [`GoCdClient`] behind an object-safe trait, so code
//! that drives a server can be handed a test double instead.

use async_trait::async_trait;
use gocd_core::domain::agent::Agent;
use gocd_core::domain::common::SimpleMessage;
use gocd_core::domain::environment::EnvironmentConfig;
use gocd_core::domain::job::{JobHistory, JobRunHistory, ScheduledJob};
use gocd_core::domain::pipeline::{
    PipelineGroup, PipelineHistoryPage, PipelineInstance, PipelineStatus,
};
use gocd_core::domain::server_health::ServerHealthMessage;
use gocd_core::dto::agent::AgentUpdate;

use crate::GoCdClient;
use crate::error::Result;
use crate::pipelines::PipelineConfigResponse;

/// Operations supported by a GoCD server
#[async_trait]
pub trait GoCdApi: Send + Sync {
    // Agents
    async fn list_agents(&self) -> Result<Vec<Agent>>;
    async fn get_agent(&self, uuid: &str) -> Result<Agent>;
    async fn update_agent(&self, uuid: &str, update: &AgentUpdate) -> Result<Agent>;
    async fn enable_agent(&self, uuid: &str) -> Result<()>;
    async fn disable_agent(&self, uuid: &str) -> Result<()>;
    async fn delete_agent(&self, uuid: &str) -> Result<()>;

    /// # Arguments
    /// * `uuid` - The agent UUID
    /// * `offset` - Number of entries to skip
    /// * `page_size` - Entries per page, honoured by the paged API form only
    async fn agent_job_history(
        &self,
        uuid: &str,
        offset: u64,
        page_size: Option<u32>,
    ) -> Result<JobRunHistory>;

    // Pipelines
    async fn list_pipeline_groups(&self) -> Result<Vec<PipelineGroup>>;
    async fn get_pipeline_instance(&self, name: &str, counter: u64) -> Result<PipelineInstance>;
    async fn get_pipeline_history_page(
        &self,
        name: &str,
        offset: u64,
    ) -> Result<PipelineHistoryPage>;
    async fn get_pipeline_status(&self, name: &str) -> Result<PipelineStatus>;
    async fn get_pipeline_config(&self, name: &str) -> Result<PipelineConfigResponse>;
    async fn pause_pipeline(&self, name: &str, cause: &str) -> Result<SimpleMessage>;
    async fn unpause_pipeline(&self, name: &str) -> Result<SimpleMessage>;
    async fn unlock_pipeline(&self, name: &str) -> Result<SimpleMessage>;

    // Jobs
    async fn list_scheduled_jobs(&self) -> Result<Vec<ScheduledJob>>;
    async fn get_job_history(
        &self,
        pipeline: &str,
        stage: &str,
        job: &str,
        offset: u64,
    ) -> Result<Vec<JobHistory>>;

    // Environments
    async fn list_environment_configs(&self) -> Result<Vec<EnvironmentConfig>>;
    async fn get_environment_config(&self, name: &str) -> Result<EnvironmentConfig>;

    // Server health
    async fn get_server_health_messages(&self) -> Result<Vec<ServerHealthMessage>>;
}

#[async_trait]
impl GoCdApi for GoCdClient {
    async fn list_agents(&self) -> Result<Vec<Agent>> {
        GoCdClient::list_agents(self).await
    }

    async fn get_agent(&self, uuid: &str) -> Result<Agent> {
        GoCdClient::get_agent(self, uuid).await
    }

    async fn update_agent(&self, uuid: &str, update: &AgentUpdate) -> Result<Agent> {
        GoCdClient::update_agent(self, uuid, update).await
    }

    async fn enable_agent(&self, uuid: &str) -> Result<()> {
        GoCdClient::enable_agent(self, uuid).await
    }

    async fn disable_agent(&self, uuid: &str) -> Result<()> {
        GoCdClient::disable_agent(self, uuid).await
    }

    async fn delete_agent(&self, uuid: &str) -> Result<()> {
        GoCdClient::delete_agent(self, uuid).await
    }

    async fn agent_job_history(
        &self,
        uuid: &str,
        offset: u64,
        page_size: Option<u32>,
    ) -> Result<JobRunHistory> {
        GoCdClient::agent_job_history(self, uuid, offset, page_size).await
    }

    async fn list_pipeline_groups(&self) -> Result<Vec<PipelineGroup>> {
        GoCdClient::list_pipeline_groups(self).await
    }

    async fn get_pipeline_instance(&self, name: &str, counter: u64) -> Result<PipelineInstance> {
        GoCdClient::get_pipeline_instance(self, name, counter).await
    }

    async fn get_pipeline_history_page(
        &self,
        name: &str,
        offset: u64,
    ) -> Result<PipelineHistoryPage> {
        GoCdClient::get_pipeline_history_page(self, name, offset).await
    }

    async fn get_pipeline_status(&self, name: &str) -> Result<PipelineStatus> {
        GoCdClient::get_pipeline_status(self, name).await
    }

    async fn get_pipeline_config(&self, name: &str) -> Result<PipelineConfigResponse> {
        GoCdClient::get_pipeline_config(self, name).await
    }

    async fn pause_pipeline(&self, name: &str, cause: &str) -> Result<SimpleMessage> {
        GoCdClient::pause_pipeline(self, name, cause).await
    }

    async fn unpause_pipeline(&self, name: &str) -> Result<SimpleMessage> {
        GoCdClient::unpause_pipeline(self, name).await
    }

    async fn unlock_pipeline(&self, name: &str) -> Result<SimpleMessage> {
        GoCdClient::unlock_pipeline(self, name).await
    }

    async fn list_scheduled_jobs(&self) -> Result<Vec<ScheduledJob>> {
        GoCdClient::list_scheduled_jobs(self).await
    }

    async fn get_job_history(
        &self,
        pipeline: &str,
        stage: &str,
        job: &str,
        offset: u64,
    ) -> Result<Vec<JobHistory>> {
        GoCdClient::get_job_history(self, pipeline, stage, job, offset).await
    }

    async fn list_environment_configs(&self) -> Result<Vec<EnvironmentConfig>> {
        GoCdClient::list_environment_configs(self).await
    }

    async fn get_environment_config(&self, name: &str) -> Result<EnvironmentConfig> {
        GoCdClient::get_environment_config(self, name).await
    }

    async fn get_server_health_messages(&self) -> Result<Vec<ServerHealthMessage>> {
        GoCdClient::get_server_health_messages(self).await
    }
}
