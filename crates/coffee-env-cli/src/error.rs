//! Error types for the coffee-env CLI

use color_eyre::eyre::Report;
use thiserror::Error;

/// CLI error type with minimal variants
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading or validation failures
    #[error(transparent)]
    Config(#[from] coffee_env::ConfigurationError),

    /// Bad command-line usage
    #[error("{0}")]
    InvalidArgument(String),

    /// File system errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failure already reported on stdout; only the exit code is left
    #[error("exited with status {0}")]
    ExitStatus(i32),

    /// Everything else (using color-eyre's Report for rich errors)
    #[error(transparent)]
    Internal(#[from] Report),
}

impl CliError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
