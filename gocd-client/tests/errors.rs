//! Transport and decode failure tests

mod common;

use common::setup;
use gocd_client::{ClientError, GoCdClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_connection_refused_is_request_failure() {
    let client = GoCdClient::new("http://127.0.0.1:1", "admin", "badger");

    let error = client.list_agents().await.unwrap_err();
    assert!(matches!(error, ClientError::RequestFailed(_)));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/go/api/agents/uuid"))
        .respond_with(ResponseTemplate::new(200).set_body_string("this is not json"))
        .mount(&server)
        .await;

    let error = client.get_agent("uuid").await.unwrap_err();
    assert!(matches!(error, ClientError::ParseError(_)));
    assert_eq!(error.status(), None);
}

#[tokio::test]
async fn test_unexpected_collection_shape_is_parse_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/go/api/agents"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"agents": []}"#))
        .mount(&server)
        .await;

    let error = client.list_agents().await.unwrap_err();
    assert!(matches!(error, ClientError::ParseError(_)));
}

#[tokio::test]
async fn test_server_error_without_body_uses_reason() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/go/api/server_health_messages"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let error = client.get_server_health_messages().await.unwrap_err();
    assert!(error.is_server_error());
    assert!(error.to_string().contains("Internal Server Error"));
}

#[tokio::test]
async fn test_unauthorized() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/go/api/admin/environments"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let error = client.list_environment_configs().await.unwrap_err();
    assert_eq!(error.status(), Some(401));
    assert!(!error.is_not_found());
}
