//! Configuration validation handler

use crate::cli::handlers::config::load_layered;
use crate::error::{CliError, Result};
use crate::output::{json_output, print_success};
use coffee_env::constants::DEFAULT_CONFIG_FILE;
use coffee_env::{ConfigurationError, EnvironmentConfig, ValidationMode};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Machine readable validation outcome
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub source: String,
    pub mode: &'static str,
    pub valid: bool,
    pub issues: Vec<ReportedIssue>,
}

#[derive(Debug, Serialize)]
pub struct ReportedIssue {
    pub field: &'static str,
    pub message: String,
}

/// Handle the `validate` command.
///
/// With `--file` the document is parsed strictly, so a missing or unknown
/// key fails before any value is checked. Without it the layered
/// configuration is validated.
///
/// In JSON mode the report already lists the issues, so a failed check ends
/// with [`CliError::ExitStatus`] instead of a second error message.
pub fn handle_validate(
    file: Option<&Path>,
    config_path: Option<&Path>,
    deployment: bool,
    json: bool,
) -> Result<()> {
    let (source, config) = match file {
        Some(path) => (path.display().to_string(), EnvironmentConfig::from_file(path)?),
        None => (
            format!(
                "{} + environment",
                config_path.map_or_else(
                    || DEFAULT_CONFIG_FILE.to_string(),
                    |path| path.display().to_string()
                )
            ),
            load_layered(config_path)?,
        ),
    };

    let mode = if deployment {
        ValidationMode::Deployment
    } else {
        ValidationMode::Structural
    };
    debug!("Validating {} in {:?} mode", source, mode);

    let issues = config.check(mode);

    if json {
        json_output(&ValidationReport {
            source,
            mode: if deployment { "deployment" } else { "structural" },
            valid: issues.is_empty(),
            issues: issues
                .iter()
                .map(|issue| ReportedIssue {
                    field: issue.field,
                    message: issue.message.clone(),
                })
                .collect(),
        })?;
        return if issues.is_empty() {
            Ok(())
        } else {
            Err(CliError::ExitStatus(1))
        };
    }

    if !issues.is_empty() {
        return Err(ConfigurationError::Invalid { issues }.into());
    }

    let environment = if config.is_production() {
        "production"
    } else {
        "non-production"
    };
    print_success(&format!("{source} is a valid {environment} configuration"));
    Ok(())
}
