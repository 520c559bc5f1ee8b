//! Server health messages

use serde::{Deserialize, Serialize};

/// A transient operational notice raised by the server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerHealthMessage {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub detail: String,
    /// `WARNING` or `ERROR`
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub time: String,
}

impl ServerHealthMessage {
    pub fn is_warning(&self) -> bool {
        self.level == "WARNING"
    }

    pub fn is_error(&self) -> bool {
        self.level == "ERROR"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_level(level: &str) -> ServerHealthMessage {
        ServerHealthMessage {
            level: level.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_levels() {
        let warning = with_level("WARNING");
        assert!(warning.is_warning());
        assert!(!warning.is_error());

        let error = with_level("ERROR");
        assert!(error.is_error());
        assert!(!error.is_warning());

        let other = with_level("warning");
        assert!(!other.is_warning());
    }
}
