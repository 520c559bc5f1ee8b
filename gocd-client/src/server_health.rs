//! Server health API endpoint

use gocd_core::domain::server_health::ServerHealthMessage;
use reqwest::Method;

use crate::GoCdClient;
use crate::error::Result;
use crate::versions::Endpoint;

impl GoCdClient {
    /// Get the current server health messages
    pub async fn get_server_health_messages(&self) -> Result<Vec<ServerHealthMessage>> {
        let endpoint = Endpoint::new(
            "/server_health_messages",
            self.versions.server_health_accept(),
        );
        let response = self.request(Method::GET, &endpoint).send().await?;

        self.handle_response(response, "server health messages").await
    }
}
