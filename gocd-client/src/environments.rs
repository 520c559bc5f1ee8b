//! Environment configuration API endpoints

use gocd_core::domain::environment::EnvironmentConfig;
use reqwest::Method;

use crate::GoCdClient;
use crate::error::Result;
use crate::versions::Endpoint;

impl GoCdClient {
    /// List all environments
    ///
    /// Pipelines and agents are reduced to their names and UUIDs.
    pub async fn list_environment_configs(&self) -> Result<Vec<EnvironmentConfig>> {
        let endpoint = Endpoint::new("/admin/environments", self.versions.environments_accept());
        let response = self.request(Method::GET, &endpoint).send().await?;

        self.handle_collection(response, "environments").await
    }

    /// Get an environment by name
    pub async fn get_environment_config(&self, name: &str) -> Result<EnvironmentConfig> {
        let endpoint = Endpoint::new(
            format!("/admin/environments/{name}"),
            self.versions.environments_accept(),
        );
        let response = self.request(Method::GET, &endpoint).send().await?;

        self.handle_response(response, "environment config").await
    }
}
