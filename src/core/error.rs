//! Server-level errors.
//!
//! Startup and dispatch failures only. Paste tool failures never surface
//! here: they are returned to the client as structured tool results.

use thiserror::Error;

use super::transport::TransportError;
use crate::domains::tools::ToolError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A tool call could not be dispatched.
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    /// Invalid configuration; aborts startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The Pastebin HTTP client could not be built.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_converts() {
        let err: Error = ToolError::not_found("delete_paste").into();
        assert_eq!(err.to_string(), "Tool error: Unknown tool: delete_paste");
    }

    #[test]
    fn test_transport_error_is_transparent() {
        let err: Error = TransportError::init("stdin closed").into();
        assert!(matches!(err, Error::Transport(_)));
        assert_eq!(err.to_string(), "Server initialization error: stdin closed");
    }

    #[test]
    fn test_config_error_message() {
        let err = Error::config("pastebin.timeout must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Configuration error: pastebin.timeout must be greater than zero"
        );
    }
}
