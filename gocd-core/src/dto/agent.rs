//! Agent DTOs

use serde::{Deserialize, Serialize};

use crate::domain::agent::AgentConfigState;

/// Partial agent update
///
/// Only fields that are `Some` are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environments: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_config_state: Option<AgentConfigState>,
}

impl AgentUpdate {
    pub fn enabled() -> Self {
        Self::with_config_state(AgentConfigState::Enabled)
    }

    pub fn disabled() -> Self {
        Self::with_config_state(AgentConfigState::Disabled)
    }

    pub fn with_config_state(state: AgentConfigState) -> Self {
        Self {
            agent_config_state: Some(state),
            ..Default::default()
        }
    }

    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn resources(mut self, resources: Vec<String>) -> Self {
        self.resources = Some(resources);
        self
    }

    pub fn environments(mut self, environments: Vec<String>) -> Self {
        self.environments = Some(environments);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
