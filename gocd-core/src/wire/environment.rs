//! Wire shape for environment configurations
//!
//! Pipelines and agents arrive as `{"name": ...}` and `{"uuid": ...}`
//! objects; the domain keeps plain name and UUID lists.

use serde::Deserialize;

use super::null_default;
use super::thin::{self, ThinRef};
use crate::domain::environment::{EnvironmentConfig, EnvironmentVariable};

#[derive(Debug, Deserialize)]
pub(crate) struct WireEnvironmentConfig {
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "null_default")]
    pipelines: Vec<ThinRef>,
    #[serde(default, deserialize_with = "null_default")]
    agents: Vec<ThinRef>,
    #[serde(default, deserialize_with = "null_default")]
    environment_variables: Vec<EnvironmentVariable>,
}

impl From<WireEnvironmentConfig> for EnvironmentConfig {
    fn from(wire: WireEnvironmentConfig) -> Self {
        Self {
            name: wire.name,
            pipelines: thin::flatten(wire.pipelines),
            agents: thin::flatten(wire.agents),
            environment_variables: wire.environment_variables,
        }
    }
}
