//! Pipeline domain types

use serde::{Deserialize, Serialize};

use crate::domain::common::Pagination;
use crate::domain::material::{Material, MaterialRevision};
use crate::domain::stage::StageRun;
use crate::wire::null_default;

/// A pipeline as listed inside a pipeline group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "crate::wire::pipeline::WirePipeline")]
pub struct Pipeline {
    pub name: String,
    pub label: String,
    pub materials: Vec<Material>,
    /// Stage names, in execution order
    pub stages: Vec<String>,
}

/// A named grouping of pipelines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineGroup {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub pipelines: Vec<Pipeline>,
}

/// A single run of a pipeline, identified by name and counter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineInstance {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub label: String,
    #[serde(default)]
    pub natural_order: f64,
    #[serde(default)]
    pub can_run: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub comment: String,
    #[serde(default)]
    pub counter: i64,
    #[serde(default)]
    pub preparing_to_schedule: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub stages: Vec<StageRun>,
    #[serde(default)]
    pub build_cause: PipelineBuildCause,
}

/// What triggered a pipeline run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineBuildCause {
    #[serde(default, deserialize_with = "null_default")]
    pub approver: String,
    #[serde(default, deserialize_with = "null_default")]
    pub material_revisions: Vec<MaterialRevision>,
    #[serde(default)]
    pub trigger_forced: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub trigger_message: String,
}

/// A page of pipeline runs, most recent first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineHistoryPage {
    #[serde(default, deserialize_with = "null_default")]
    pub pipelines: Vec<PipelineInstance>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Pause, lock and schedulability state of a pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStatus {
    #[serde(default)]
    pub paused: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub paused_cause: String,
    #[serde(default, deserialize_with = "null_default")]
    pub paused_by: String,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub schedulable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_group_stage_reshape() {
        let groups: Vec<PipelineGroup> = serde_json::from_str(
            r#"[{
                "name": "first",
                "pipelines": [{
                    "name": "up42",
                    "label": "${COUNT}",
                    "stages": [{"name": "s1"}, {"name": "s2"}]
                }]
            }]"#,
        )
        .unwrap();

        let pipeline = &groups[0].pipelines[0];
        assert_eq!(pipeline.stages, vec!["s1", "s2"]);
        assert!(pipeline.materials.is_empty());
    }

    #[test]
    fn test_pipeline_accepts_plain_stage_names() {
        let pipeline: Pipeline =
            serde_json::from_str(r#"{"name": "up42", "stages": ["s1"]}"#).unwrap();
        assert_eq!(pipeline.stages, vec!["s1"]);
        assert_eq!(pipeline.label, "");
    }

    #[test]
    fn test_pipeline_instance_decode() {
        let instance: PipelineInstance = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "PipelineName",
                "natural_order": 1.0,
                "can_run": true,
                "comment": null,
                "counter": 1,
                "label": "1",
                "preparing_to_schedule": false,
                "stages": [{
                    "id": 1,
                    "name": "stage1",
                    "result": "Passed",
                    "counter": "1",
                    "rerun_of_counter": null,
                    "jobs": [{"id": 1, "name": "jsunit", "result": "Passed", "state": "Completed", "scheduled_date": 1436172201081}]
                }],
                "build_cause": {
                    "approver": "",
                    "trigger_forced": false,
                    "trigger_message": "modified by Pick E Reader",
                    "material_revisions": []
                }
            }"#,
        )
        .unwrap();

        assert_eq!(instance.comment, "");
        assert_eq!(instance.stages[0].jobs[0].name, "jsunit");
        assert_eq!(instance.stages[0].rerun_of_counter, None);
        assert_eq!(instance.build_cause.trigger_message, "modified by Pick E Reader");
    }

    #[test]
    fn test_pipeline_status_decode() {
        let status: PipelineStatus = serde_json::from_str(
            r#"{"paused": true, "paused_cause": "Reason for pausing this pipeline", "paused_by": "admin", "locked": false, "schedulable": false}"#,
        )
        .unwrap();
        assert!(status.paused);
        assert_eq!(status.paused_by, "admin");
    }
}
