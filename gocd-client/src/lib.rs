//! GoCD HTTP Client
//!
//! A typed client for the GoCD server's management API.
//!
//! Every operation is a single request/response round trip: the client
//! resolves the path against the configured host, picks the `Accept` header
//! for the resource's API version, sends the request with Basic auth and
//! decodes the body into the types from `gocd-core`.
//!
//! # Example
//!
//! ```no_run
//! use gocd_client::GoCdClient;
//!
//! #[tokio::main]
//! async fn main() -> gocd_client::Result<()> {
//!     let client = GoCdClient::new("http://localhost:8153", "admin", "badger");
//!
//!     for agent in client.list_agents().await? {
//!         println!("{} ({})", agent.hostname, agent.uuid);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod versions;

mod agents;
mod environments;
mod jobs;
mod pipelines;
mod server_health;
mod xml;

// Re-export commonly used types
pub use api::GoCdApi;
pub use config::{ClientConfig, Credentials};
pub use error::{ClientError, Faults, Result};
pub use pipelines::PipelineConfigResponse;
pub use versions::{Accept, ApiVersions};

use gocd_core::wire::envelope::decode_collection_str;
use reqwest::header::{ACCEPT, HeaderMap};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::versions::Endpoint;

/// Prefix of every API path on the server
const API_PREFIX: &str = "/go/api";

/// Header required by mutating pipeline endpoints
const CONFIRM_HEADER: &str = "X-GoCD-Confirm";

/// HTTP client for the GoCD API
///
/// The client holds only static configuration and a connection pool, so it
/// can be cloned and shared freely between tasks.
#[derive(Debug, Clone)]
pub struct GoCdClient {
    /// Base URL of the server (e.g., "https://ci.example.com")
    base_url: String,
    /// Basic auth credentials attached to every request
    credentials: Option<Credentials>,
    /// Version strategy
    versions: ApiVersions,
    /// HTTP client instance
    client: Client,
}

/// Status, headers and body of a completed request
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub headers: HeaderMap,
    pub body: String,
}

impl GoCdClient {
    /// Create a new client for `base_url` using Basic auth
    ///
    /// # Example
    /// ```
    /// use gocd_client::GoCdClient;
    ///
    /// let client = GoCdClient::new("http://localhost:8153", "admin", "badger");
    /// assert_eq!(client.base_url(), "http://localhost:8153");
    /// ```
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::with_client(
            ClientConfig::new(base_url).with_credentials(username, password),
            Client::new(),
        )
    }

    /// Create a client from a validated configuration
    ///
    /// Builds an HTTP client honouring the configured timeout.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(config, client))
    }

    /// Create a client with a custom HTTP client
    ///
    /// This allows you to configure proxies, TLS settings, etc. The
    /// configuration's timeout is not applied to `client`.
    pub fn with_client(config: ClientConfig, client: Client) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials: config.credentials,
            versions: config.api_versions,
            client,
        }
    }

    /// Get the base URL of the server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the API version strategy in use
    pub fn api_versions(&self) -> &ApiVersions {
        &self.versions
    }

    // =============================================================================
    // Transport
    // =============================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// Start a request to `endpoint` with auth and `Accept` set
    pub(crate) fn request(&self, method: Method, endpoint: &Endpoint) -> RequestBuilder {
        let url = self.url(&endpoint.path);
        debug!(%method, %url, accept = %endpoint.accept, "sending request");

        let mut builder = self.client.request(method, url);
        if !endpoint.query.is_empty() {
            builder = builder.query(&endpoint.query);
        }
        if let Some(accept) = endpoint.accept.header_value() {
            builder = builder.header(ACCEPT, accept);
        }
        if let Some(credentials) = &self.credentials {
            builder = builder.basic_auth(&credentials.username, Some(&credentials.password));
        }
        builder
    }

    /// Start a request to a mutating pipeline endpoint
    pub(crate) fn confirmed_request(&self, method: Method, endpoint: &Endpoint) -> RequestBuilder {
        self.request(method, endpoint).header(CONFIRM_HEADER, "true")
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Read the status and body of a response
    ///
    /// Every fault is recorded: a non-2xx status and a failure to read the
    /// body are reported together.
    pub(crate) async fn read_body(&self, response: reqwest::Response) -> Result<RawResponse> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await;
        debug!(status = status.as_u16(), "received response");

        let mut faults = Faults::new();
        if !status.is_success() {
            warn!(status = status.as_u16(), "server rejected request");
            let message = match &body {
                Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
                _ => status_text(status),
            };
            faults.push(ClientError::api_error(status.as_u16(), message));
        }

        let body = match body {
            Ok(body) => body,
            Err(e) => {
                faults.push(ClientError::RequestFailed(e));
                String::new()
            }
        };

        faults.into_result(RawResponse { headers, body })
    }

    /// Handle an API response and deserialize JSON
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        what: &str,
    ) -> Result<T> {
        let raw = self.read_body(response).await?;
        serde_json::from_str(&raw.body).map_err(|e| ClientError::parse(what, e))
    }

    /// Handle an API response carrying a collection, bare or in an `_embedded` envelope
    pub(crate) async fn handle_collection<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        key: &str,
    ) -> Result<Vec<T>> {
        let raw = self.read_body(response).await?;
        decode_collection_str(&raw.body, key).map_err(|e| ClientError::parse(key, e))
    }

    /// Handle an API response whose body is not needed
    pub(crate) async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        self.read_body(response).await.map(|_| ())
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GoCdClient::new("http://localhost:8153", "admin", "badger");
        assert_eq!(client.base_url(), "http://localhost:8153");
        assert_eq!(client.api_versions(), &ApiVersions::default());
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = GoCdClient::new("http://localhost:8153/", "admin", "badger");
        assert_eq!(client.base_url(), "http://localhost:8153");
        assert_eq!(client.url("/agents"), "http://localhost:8153/go/api/agents");
    }

    #[test]
    fn test_client_from_invalid_config() {
        let result = GoCdClient::from_config(ClientConfig::new("localhost:8153"));
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_client_with_custom_client() {
        let client = GoCdClient::with_client(ClientConfig::new("http://localhost:8153"), Client::new());
        assert_eq!(client.base_url(), "http://localhost:8153");
    }
}
