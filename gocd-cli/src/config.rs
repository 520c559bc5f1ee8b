//! Configuration module
//!
//! Handles CLI configuration including the server URL and credentials.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use gocd_client::{ClientConfig, GoCdClient};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the GoCD server
    pub server_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Build a client for the configured server
    pub fn client(&self) -> Result<GoCdClient> {
        let mut client_config = ClientConfig::new(&self.server_url)
            .with_timeout(Duration::from_secs(self.timeout_secs));

        match (&self.username, &self.password) {
            (Some(username), Some(password)) => {
                client_config = client_config.with_credentials(username, password);
            }
            (None, None) => {}
            _ => bail!("--username and --password must be given together"),
        }

        GoCdClient::from_config(client_config)
            .with_context(|| format!("cannot use server {}", self.server_url))
    }
}
