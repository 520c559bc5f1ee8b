//! Environment endpoint tests

mod common;

use common::{accept_version, auth, setup};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn environment_json() -> serde_json::Value {
    json!({
        "_links": {"self": {"href": "https://ci.example.com/go/api/admin/environments/foobar"}},
        "name": "foobar",
        "pipelines": [{
            "_links": {"self": {"href": "https://ci.example.com/go/api/admin/pipelines/up42"}},
            "name": "up42"
        }],
        "agents": [{
            "_links": {"self": {"href": "https://ci.example.com/go/api/agents/12345678-e2f6-4c78-123456789012"}},
            "uuid": "12345678-e2f6-4c78-123456789012"
        }],
        "environment_variables": [
            {"secure": false, "name": "username", "value": "admin"},
            {"secure": true, "name": "password", "encrypted_value": "LSd1TI0eLa+DjytHjj0qjA=="}
        ]
    })
}

#[tokio::test]
async fn test_list_environment_configs() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/go/api/admin/environments"))
        .and(accept_version(2))
        .and(auth())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_links": {},
            "_embedded": {"environments": [environment_json()]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let environments = client.list_environment_configs().await.unwrap();
    assert_eq!(environments.len(), 1);

    let environment = &environments[0];
    assert_eq!(environment.name, "foobar");
    assert_eq!(environment.pipelines, vec!["up42"]);
    assert_eq!(environment.agents, vec!["12345678-e2f6-4c78-123456789012"]);
    assert_eq!(environment.environment_variables.len(), 2);

    let password = &environment.environment_variables[1];
    assert!(password.secure);
    assert_eq!(password.value, None);
    assert_eq!(
        password.encrypted_value.as_deref(),
        Some("LSd1TI0eLa+DjytHjj0qjA==")
    );
}

#[tokio::test]
async fn test_get_environment_config() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/go/api/admin/environments/foobar"))
        .and(accept_version(2))
        .respond_with(ResponseTemplate::new(200).set_body_json(environment_json()))
        .expect(1)
        .mount(&server)
        .await;

    let environment = client.get_environment_config("foobar").await.unwrap();
    assert_eq!(environment.name, "foobar");
    assert_eq!(environment.pipelines, vec!["up42"]);
}
