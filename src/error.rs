//! Error types and exit codes for github-mcp-server

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for github-mcp-server operations
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("MCP transport error: {message}")]
    TransportError { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Convert error to an exit code:
    /// - 0: Success
    /// - 1: IO / serialization error
    /// - 2: Configuration error
    /// - 3: Transport error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::ConfigError { .. } => ExitCode::from(2),
            Self::TransportError { .. } => ExitCode::from(3),
            Self::Serialization(_) => ExitCode::from(1),
            Self::Io(_) => ExitCode::from(1),
        }
    }
}

/// Result type alias for github-mcp-server operations
pub type Result<T> = std::result::Result<T, ServerError>;
