//! Environment configuration types

use serde::{Deserialize, Serialize};

/// A named set of environment variables bound to pipelines and agents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "crate::wire::environment::WireEnvironmentConfig")]
pub struct EnvironmentConfig {
    pub name: String,
    /// Pipeline names
    pub pipelines: Vec<String>,
    /// Agent UUIDs
    pub agents: Vec<String>,
    pub environment_variables: Vec<EnvironmentVariable>,
}

/// Environment variable of an environment, stage or job
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentVariable {
    #[serde(default)]
    pub secure: bool,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_reshape() {
        let env: EnvironmentConfig = serde_json::from_str(
            r#"{
                "name": "foobar",
                "pipelines": [{"name": "up42", "_links": {}}],
                "agents": [{"uuid": "12345678-e2f6-4c78-123456789012"}],
                "environment_variables": [
                    {"secure": false, "name": "username", "value": "admin"},
                    {"secure": true, "name": "password", "encrypted_value": "LSd1TI0eLa+DjytHjj0qjA=="}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(env.name, "foobar");
        assert_eq!(env.pipelines, vec!["up42"]);
        assert_eq!(env.agents, vec!["12345678-e2f6-4c78-123456789012"]);
        assert_eq!(env.environment_variables[0].value.as_deref(), Some("admin"));
        assert!(env.environment_variables[1].secure);
        assert!(env.environment_variables[1].value.is_none());
    }

    #[test]
    fn test_environment_serializes_plain_lists() {
        let env = EnvironmentConfig {
            name: "uat".to_string(),
            pipelines: vec!["up42".to_string()],
            agents: vec![],
            environment_variables: vec![],
        };
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["pipelines"], serde_json::json!(["up42"]));
    }
}
