//! Wire shapes for pipeline groups
//!
//! Pipeline group listings describe stages as `{"name": ...}` objects while
//! the domain keeps only the ordered stage names.

use serde::Deserialize;

use super::null_default;
use super::thin::{self, ThinRef};
use crate::domain::material::Material;
use crate::domain::pipeline::Pipeline;

#[derive(Debug, Deserialize)]
pub(crate) struct WirePipeline {
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "null_default")]
    label: String,
    #[serde(default, deserialize_with = "null_default")]
    materials: Vec<Material>,
    #[serde(default, deserialize_with = "null_default")]
    stages: Vec<ThinRef>,
}

impl From<WirePipeline> for Pipeline {
    fn from(wire: WirePipeline) -> Self {
        Self {
            name: wire.name,
            label: wire.label,
            materials: wire.materials,
            stages: thin::flatten(wire.stages),
        }
    }
}
