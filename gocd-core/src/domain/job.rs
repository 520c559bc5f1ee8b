//! Job domain types

use serde::{Deserialize, Serialize};

use crate::domain::common::Pagination;
use crate::wire::null_default;
use crate::wire::scalar::{epoch_millis, string_or_number};

/// A job inside a stage run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    /// e.g. `Passed`, `Failed`, `Cancelled`, `Unknown`
    #[serde(default, deserialize_with = "null_default")]
    pub result: String,
    /// e.g. `Scheduled`, `Assigned`, `Building`, `Completed`
    #[serde(default, deserialize_with = "null_default")]
    pub state: String,
    /// Epoch milliseconds
    #[serde(default, deserialize_with = "epoch_millis")]
    pub scheduled_date: i64,
}

/// A past execution of a job
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobHistory {
    #[serde(default, deserialize_with = "null_default")]
    pub agent_uuid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub job_state_transitions: Vec<JobStateTransition>,
    #[serde(default, deserialize_with = "epoch_millis")]
    pub scheduled_date: i64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub original_job_id: String,
    #[serde(default)]
    pub pipeline_counter: i64,
    #[serde(default)]
    pub pipeline_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub result: String,
    #[serde(default, deserialize_with = "null_default")]
    pub state: String,
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub stage_counter: String,
    #[serde(default)]
    pub stage_name: String,
    #[serde(default)]
    pub rerun: bool,
}

/// One state change of a job (schedule, assign, ..., complete)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStateTransition {
    /// Epoch milliseconds
    #[serde(default, deserialize_with = "epoch_millis")]
    pub state_change_time: i64,
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub state: String,
}

/// A page of jobs that ran on an agent, most recent first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRunHistory {
    #[serde(default, deserialize_with = "null_default")]
    pub jobs: Vec<JobHistory>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// A job that is scheduled but not yet assigned to an agent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduledJob {
    pub name: String,
    pub job_id: String,
    /// `pipeline/counter/stage/counter/job`
    pub build_locator: String,
    pub link: Link,
    pub environment: Option<String>,
    pub resources: Vec<String>,
}

impl ScheduledJob {
    /// Full URL of the job's detail page
    pub fn job_url(&self) -> &str {
        &self.link.href
    }

    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    pub fn pipeline_name(&self) -> Option<&str> {
        self.locator_part(0)
    }

    pub fn pipeline_counter(&self) -> Option<u64> {
        self.locator_part(1)?.parse().ok()
    }

    pub fn stage_name(&self) -> Option<&str> {
        self.locator_part(2)
    }

    pub fn stage_counter(&self) -> Option<u64> {
        self.locator_part(3)?.parse().ok()
    }

    pub fn job_name(&self) -> Option<&str> {
        self.locator_part(4)
    }

    fn locator_part(&self, index: usize) -> Option<&str> {
        let parts: Vec<&str> = self.build_locator.split('/').collect();
        if parts.len() != 5 || parts.iter().any(|part| part.is_empty()) {
            return None;
        }
        parts.get(index).copied()
    }
}

/// A `<link rel="..." href="..."/>` element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}
