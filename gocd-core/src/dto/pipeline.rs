//! Pipeline DTOs

use serde::{Deserialize, Serialize};

/// Request to pause a pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseRequest {
    pub pause_cause: String,
}
