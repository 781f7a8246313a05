//! Error types for the plugin library.

use thiserror::Error;

/// Errors that can occur while collecting Nextcloud metrics.
#[derive(Debug, Error)]
pub enum PluginError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Failed to parse the serverinfo response.
    #[error("Failed to parse serverinfo response: {0}")]
    Parse(String),

    /// Connection failed.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Timeout waiting for response.
    #[error("Request timed out")]
    Timeout,

    /// A required environment variable is not set.
    #[error("Environment variable `{0}` is not set")]
    MissingEnv(&'static str),

    /// The response document lacks a field this domain reports on.
    #[error("Serverinfo response has no `{0}` field")]
    MissingField(&'static str),
}

impl From<reqwest::Error> for PluginError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PluginError::Timeout
        } else if err.is_connect() {
            PluginError::Connection(err.to_string())
        } else {
            PluginError::Http(err.to_string())
        }
    }
}
