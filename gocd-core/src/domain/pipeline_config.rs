//! Pipeline configuration types
//!
//! The configuration tree returned by the admin pipelines endpoint. Task and
//! authorization blocks vary widely per plugin and are kept as raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::environment::EnvironmentVariable;
use crate::domain::material::Material;
use crate::wire::null_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_template: Option<String>,
    /// `lockOnFailure`, `unlockWhenFinished` or `none`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_behavior: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Value>,
    #[serde(default, deserialize_with = "null_default")]
    pub parameters: Vec<Parameter>,
    #[serde(default, deserialize_with = "null_default")]
    pub environment_variables: Vec<EnvironmentVariable>,
    #[serde(default, deserialize_with = "null_default")]
    pub materials: Vec<Material>,
    #[serde(default, deserialize_with = "null_default")]
    pub stages: Vec<StageConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_tool: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer: Option<Timer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub value: String,
}

/// Cron-style trigger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timer {
    pub spec: String,
    #[serde(default)]
    pub only_on_changes: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageConfig {
    pub name: String,
    #[serde(default)]
    pub fetch_materials: bool,
    #[serde(default)]
    pub clean_working_directory: bool,
    #[serde(default)]
    pub never_cleanup_artifacts: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval: Option<Approval>,
    #[serde(default, deserialize_with = "null_default")]
    pub environment_variables: Vec<EnvironmentVariable>,
    #[serde(default, deserialize_with = "null_default")]
    pub jobs: Vec<JobConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Approval {
    /// `success` or `manual`
    #[serde(rename = "type")]
    pub approval_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: String,
    /// A count or `"all"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_instance_count: Option<Value>,
    /// Minutes, or `"never"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Value>,
    #[serde(default, deserialize_with = "null_default")]
    pub environment_variables: Vec<EnvironmentVariable>,
    #[serde(default, deserialize_with = "null_default")]
    pub resources: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elastic_profile_id: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub tasks: Vec<Value>,
    #[serde(default, deserialize_with = "null_default")]
    pub tabs: Vec<Value>,
    #[serde(default, deserialize_with = "null_default")]
    pub artifacts: Vec<ArtifactConfig>,
}

/// How a job publishes its artifacts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactConfig {
    /// `build`, `test` or `external`
    #[serde(rename = "type")]
    pub artifact_type: String,
    #[serde(default, deserialize_with = "null_default")]
    pub source: String,
    #[serde(default, deserialize_with = "null_default")]
    pub destination: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::material::MaterialAttributes;

    #[test]
    fn test_pipeline_config_decode() {
        let config: PipelineConfig = serde_json::from_str(
            r#"{
                "label_template": "${COUNT}",
                "lock_behavior": "lockOnFailure",
                "name": "new_pipeline",
                "template": null,
                "group": "new_group",
                "parameters": [],
                "environment_variables": [],
                "materials": [{
                    "type": "git",
                    "attributes": {"url": "git@github.com:sample_repo/example.git", "branch": "master", "auto_update": true}
                }],
                "stages": [{
                    "name": "defaultStage",
                    "fetch_materials": true,
                    "clean_working_directory": false,
                    "never_cleanup_artifacts": false,
                    "approval": {"type": "success", "authorization": {"roles": [], "users": []}},
                    "environment_variables": [],
                    "jobs": [{
                        "name": "defaultJob",
                        "run_instance_count": null,
                        "timeout": "never",
                        "resources": ["linux"],
                        "tasks": [{"type": "exec", "attributes": {"command": "ls"}}],
                        "artifacts": [{"type": "build", "source": "target", "destination": "result"}]
                    }]
                }],
                "timer": {"spec": "0 0 22 ? * MON-FRI", "only_on_changes": true}
            }"#,
        )
        .unwrap();

        assert_eq!(config.group.as_deref(), Some("new_group"));
        assert_eq!(config.template, None);
        let job = &config.stages[0].jobs[0];
        assert_eq!(job.artifacts[0].artifact_type, "build");
        assert_eq!(job.tasks.len(), 1);
        assert!(config.timer.unwrap().only_on_changes);
        assert!(matches!(
            config.materials[0].typed_attributes().unwrap(),
            Some(MaterialAttributes::Git(_))
        ));
    }
}
