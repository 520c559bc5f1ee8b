//! Shared helpers for the API integration tests
//!
//! Each test starts its own `MockServer`; nothing is shared between tests.

#![allow(dead_code)]

use gocd_client::GoCdClient;
use wiremock::MockServer;
use wiremock::matchers::{HeaderExactMatcher, basic_auth, header};

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "badger";

/// Start a fresh mock server and a client pointing at it
pub async fn setup() -> (MockServer, GoCdClient) {
    let server = MockServer::start().await;
    let client = GoCdClient::new(server.uri(), USERNAME, PASSWORD);
    (server, client)
}

/// Matches the versioned `Accept` header
pub fn accept_version(version: u8) -> HeaderExactMatcher {
    header("Accept", format!("application/vnd.go.cd.v{version}+json"))
}

/// Matches the plain JSON `Accept` header
pub fn accept_json() -> HeaderExactMatcher {
    header("Accept", "application/json")
}

/// Matches the test credentials
pub fn auth() -> wiremock::matchers::BasicAuthMatcher {
    basic_auth(USERNAME, PASSWORD)
}
