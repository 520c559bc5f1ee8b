//! Server health endpoint tests

mod common;

use common::{accept_version, auth, setup};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_get_server_health_messages() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/go/api/server_health_messages"))
        .and(accept_version(1))
        .and(auth())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "message": "Job 'pipeline/stage/job' is not responding",
            "detail": "This job may be hung.",
            "level": "WARNING",
            "time": "2018-03-07T03:39:07Z"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let messages = client.get_server_health_messages().await.unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].is_warning());
    assert!(!messages[0].is_error());
    assert_eq!(messages[0].detail, "This job may be hung.");
    assert_eq!(messages[0].time, "2018-03-07T03:39:07Z");
}

#[tokio::test]
async fn test_get_server_health_messages_empty() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/go/api/server_health_messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let messages = client.get_server_health_messages().await.unwrap();
    assert!(messages.is_empty());
}
