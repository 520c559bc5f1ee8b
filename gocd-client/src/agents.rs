//! Agent-related API endpoints

use gocd_core::domain::agent::Agent;
use gocd_core::domain::job::JobRunHistory;
use gocd_core::dto::agent::AgentUpdate;
use reqwest::Method;
use tracing::debug;

use crate::GoCdClient;
use crate::error::Result;
use crate::versions::Endpoint;

impl GoCdClient {
    // =============================================================================
    // Agent Query
    // =============================================================================

    /// List all agents, including those pending registration
    ///
    /// Returns an empty list when the server reports no agents.
    pub async fn list_agents(&self) -> Result<Vec<Agent>> {
        let endpoint = Endpoint::new("/agents", self.versions.agents_accept());
        let response = self.request(Method::GET, &endpoint).send().await?;

        self.handle_collection(response, "agents").await
    }

    /// Get an agent by UUID
    pub async fn get_agent(&self, uuid: &str) -> Result<Agent> {
        let endpoint = Endpoint::new(format!("/agents/{uuid}"), self.versions.agents_accept());
        let response = self.request(Method::GET, &endpoint).send().await?;

        self.handle_response(response, "agent").await
    }

    /// List the jobs that ran on an agent, most recent first
    ///
    /// # Arguments
    /// * `uuid` - The agent UUID
    /// * `offset` - Number of entries to skip
    /// * `page_size` - Entries per page; only sent by the paged API form
    ///
    /// # Returns
    /// The page of jobs with the pagination reported by the server
    pub async fn agent_job_history(
        &self,
        uuid: &str,
        offset: u64,
        page_size: Option<u32>,
    ) -> Result<JobRunHistory> {
        if page_size.is_some() && self.versions.agent_job_history.is_none() {
            debug!("legacy job run history ignores the page size");
        }
        let endpoint = self.versions.agent_job_history(uuid, offset, page_size);
        let response = self.request(Method::GET, &endpoint).send().await?;

        self.handle_response(response, "agent job run history").await
    }

    // =============================================================================
    // Agent Mutation
    // =============================================================================

    /// Update some attributes of an agent
    ///
    /// Only the fields set on `update` are sent.
    ///
    /// # Arguments
    /// * `uuid` - The agent UUID
    /// * `update` - Fields to change
    ///
    /// # Returns
    /// The agent as the server sees it after the update
    ///
    /// # Example
    /// ```no_run
    /// # use gocd_client::GoCdClient;
    /// # async fn example() -> gocd_client::Result<()> {
    /// let client = GoCdClient::new("http://localhost:8153", "admin", "badger");
    /// use gocd_core::dto::agent::AgentUpdate;
    ///
    /// let update = AgentUpdate::default()
    ///     .hostname("agent02.example.com")
    ///     .resources(vec!["linux".to_string(), "java".to_string()]);
    /// let agent = client.update_agent("adb9540a-b954-4571-9d9b-2f330739d4da", &update).await?;
    /// assert_eq!(agent.hostname, "agent02.example.com");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn update_agent(&self, uuid: &str, update: &AgentUpdate) -> Result<Agent> {
        let endpoint = Endpoint::new(format!("/agents/{uuid}"), self.versions.agents_accept());
        let response = self
            .request(Method::PATCH, &endpoint)
            .json(update)
            .send()
            .await?;

        self.handle_response(response, "agent").await
    }

    /// Enable an agent
    ///
    /// # Arguments
    /// * `uuid` - The agent UUID
    ///
    /// # Example
    /// ```no_run
    /// # use gocd_client::GoCdClient;
    /// # async fn example() -> gocd_client::Result<()> {
    /// let client = GoCdClient::new("http://localhost:8153", "admin", "badger");
    /// client.enable_agent("adb9540a-b954-4571-9d9b-2f330739d4da").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn enable_agent(&self, uuid: &str) -> Result<()> {
        self.update_agent(uuid, &AgentUpdate::enabled()).await.map(|_| ())
    }

    /// Disable an agent
    ///
    /// A disabled agent finishes its current job but is assigned no new ones.
    ///
    /// # Arguments
    /// * `uuid` - The agent UUID
    pub async fn disable_agent(&self, uuid: &str) -> Result<()> {
        self.update_agent(uuid, &AgentUpdate::disabled()).await.map(|_| ())
    }

    /// Delete an agent
    ///
    /// The agent must be disabled and not building; the server rejects the
    /// request otherwise.
    ///
    /// # Arguments
    /// * `uuid` - The agent UUID
    ///
    /// # Example
    /// ```no_run
    /// # use gocd_client::GoCdClient;
    /// # async fn example() -> gocd_client::Result<()> {
    /// let client = GoCdClient::new("http://localhost:8153", "admin", "badger");
    /// let uuid = "adb9540a-b954-4571-9d9b-2f330739d4da";
    /// client.disable_agent(uuid).await?;
    /// client.delete_agent(uuid).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn delete_agent(&self, uuid: &str) -> Result<()> {
        let endpoint = Endpoint::new(format!("/agents/{uuid}"), self.versions.agents_accept());
        let response = self.request(Method::DELETE, &endpoint).send().await?;

        self.handle_empty_response(response).await
    }
}
