//! Error types for loading and validating environment configuration

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// A single problem found while validating a configuration record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Dotted key of the offending field (e.g. `auth0.callbackURL`)
    pub field: &'static str,

    /// Human readable description of the problem
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Configuration file does not exist
    #[error("Configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Configuration file could not be read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document is malformed, has missing/unknown keys or wrong types
    #[error("Failed to parse configuration: {details}")]
    Parse { details: String },

    /// Record could not be rendered
    #[error("Failed to serialize configuration: {details}")]
    Serialize { details: String },

    /// Record parsed but failed validation
    #[error("Invalid configuration:\n{}", format_issues(issues))]
    Invalid { issues: Vec<ValidationIssue> },

    /// A URL could not be built from the configured values
    #[error("Invalid URL for {field}: {details}")]
    InvalidUrl { field: &'static str, details: String },

    /// Lookup of a key that is not part of the record
    #[error("Unknown configuration key: {key}")]
    UnknownKey { key: String },

    /// The process-wide record was already set
    #[error("Environment configuration is already initialized")]
    AlreadyInitialized,
}

impl ConfigurationError {
    /// Validation issues carried by this error, empty for other variants
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Self::Invalid { issues } => issues,
            _ => &[],
        }
    }
}

impl From<figment::Error> for ConfigurationError {
    fn from(err: figment::Error) -> Self {
        Self::Parse {
            details: err.to_string(),
        }
    }
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {issue}"))
        .collect::<Vec<_>>()
        .join("\n")
}
