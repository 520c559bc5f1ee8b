//! Error types for the GoCD client
//!
//! A single call can observe several faults (for example a non-2xx status and
//! a failure to read the error body). [`Faults`] collects them and collapses
//! them into one [`ClientError`].

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the GoCD client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, timeout, body read)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Failed to decode a response body
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Base URL is malformed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Client configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Several faults observed during one call
    #[error("{} errors occurred: {}", .0.len(), join(.0))]
    Multiple(Vec<ClientError>),
}

fn join(errors: &[ClientError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Create a parse error naming what was being decoded
    pub fn parse(what: &str, error: impl std::fmt::Display) -> Self {
        Self::ParseError(format!("{what}: {error}"))
    }

    /// Underlying faults; a single error is its own only fault
    pub fn faults(&self) -> &[ClientError] {
        match self {
            Self::Multiple(errors) => errors,
            other => std::slice::from_ref(other),
        }
    }

    /// HTTP status of the first API fault, if any
    pub fn status(&self) -> Option<u16> {
        self.faults().iter().find_map(|fault| match fault {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        })
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(status) if (400..500).contains(&status))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }
}

/// Ordered collection of faults observed during one call
#[derive(Debug, Default)]
pub struct Faults(Vec<ClientError>);

impl Faults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ClientError) {
        match error {
            ClientError::Multiple(errors) => self.0.extend(errors),
            error => self.0.push(error),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// No error when empty, the fault itself when single, `Multiple` otherwise
    pub fn into_error(mut self) -> Option<ClientError> {
        match self.0.len() {
            0 => None,
            1 => self.0.pop(),
            _ => Some(ClientError::Multiple(self.0)),
        }
    }

    /// `Ok(value)` when no fault was recorded
    pub fn into_result<T>(self, value: T) -> Result<T> {
        match self.into_error() {
            None => Ok(value),
            Some(error) => Err(error),
        }
    }
}

impl Extend<ClientError> for Faults {
    fn extend<I: IntoIterator<Item = ClientError>>(&mut self, iter: I) {
        for error in iter {
            self.push(error);
        }
    }
}

impl FromIterator<ClientError> for Faults {
    fn from_iter<I: IntoIterator<Item = ClientError>>(iter: I) -> Self {
        let mut faults = Faults::new();
        faults.extend(iter);
        faults
    }
}
