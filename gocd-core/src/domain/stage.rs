//! Stage run types

use serde::{Deserialize, Serialize};

use crate::domain::job::Job;
use crate::wire::null_default;
use crate::wire::scalar::string_or_number;

/// One execution of a stage within a pipeline instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRun {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub approved_by: String,
    #[serde(default, deserialize_with = "null_default")]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub can_run: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub result: String,
    #[serde(default, deserialize_with = "null_default")]
    pub approval_type: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub counter: String,
    #[serde(default)]
    pub operate_permission: bool,
    /// Counter of the stage run this one re-ran, if any
    #[serde(default)]
    pub rerun_of_counter: Option<i64>,
    #[serde(default)]
    pub scheduled: bool,
}
