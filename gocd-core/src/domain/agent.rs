//! Agent domain model
//!
//! Represents a worker node registered with the server.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::wire::{null_default, thin};

/// An agent as reported by the server
///
/// Every field is optional on the wire; absent values decode to their
/// defaults and empty values are omitted again when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uuid: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hostname: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ip_address: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sandbox: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub operating_system: String,

    /// Free disk space in bytes, or [`FreeSpace::UNKNOWN`]
    #[serde(default)]
    pub free_space: FreeSpace,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_config_state: Option<AgentConfigState>,

    /// Runtime state, e.g. `Idle`, `Building`, `LostContact`, `Missing`
    #[serde(default, deserialize_with = "null_default", skip_serializing_if = "String::is_empty")]
    pub agent_state: String,

    /// Build state, e.g. `Idle`, `Building`, `Cancelled`
    #[serde(default, deserialize_with = "null_default", skip_serializing_if = "String::is_empty")]
    pub build_state: String,

    /// Present while the agent is building
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_details: Option<BuildDetails>,

    #[serde(default, deserialize_with = "null_default", skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,

    /// Environment names; newer servers send `{"name": ...}` objects here
    #[serde(default, deserialize_with = "thin::names", skip_serializing_if = "Vec::is_empty")]
    pub environments: Vec<String>,
}

impl Agent {
    pub fn is_enabled(&self) -> bool {
        self.agent_config_state == Some(AgentConfigState::Enabled)
    }

    pub fn is_building(&self) -> bool {
        self.agent_state == "Building" || self.build_state == "Building"
    }
}

/// What the agent is currently building
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildDetails {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pipeline_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub stage_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub job_name: String,
}

/// Configuration state of an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentConfigState {
    Enabled,
    Disabled,
    Pending,
}

impl std::fmt::Display for AgentConfigState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentConfigState::Enabled => write!(f, "Enabled"),
            AgentConfigState::Disabled => write!(f, "Disabled"),
            AgentConfigState::Pending => write!(f, "Pending"),
        }
    }
}

/// Free disk space reported by an agent
///
/// Servers send either a byte count or a string such as `"unknown"`.
/// Any string decodes to [`FreeSpace::UNKNOWN`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FreeSpace(pub i64);

impl FreeSpace {
    pub const UNKNOWN: FreeSpace = FreeSpace(-1);

    pub fn is_known(&self) -> bool {
        self.0 >= 0
    }

    /// Byte count, if known
    pub fn bytes(&self) -> Option<u64> {
        u64::try_from(self.0).ok()
    }
}

impl std::fmt::Display for FreeSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.bytes() {
            Some(bytes) => write!(f, "{bytes}"),
            None => write!(f, "unknown"),
        }
    }
}

impl<'de> Deserialize<'de> for FreeSpace {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(_) => Ok(FreeSpace::UNKNOWN),
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .map(FreeSpace)
                .ok_or_else(|| D::Error::custom(format!("free_space out of range: {n}"))),
            other => Err(D::Error::custom(format!(
                "free_space: expected a number or a string, found {other}"
            ))),
        }
    }
}
