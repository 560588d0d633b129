//! Process-wide environment configuration
//!
//! The record is set once, either explicitly through [`install`] or lazily
//! from defaults, `coffee-env.toml` and the environment on first access, and
//! is shared read-only for the rest of the process.

use crate::config::EnvironmentConfig;
use crate::error::{ConfigurationError, Result};
use once_cell::sync::OnceCell;
use tracing::info;

static ENVIRONMENT: OnceCell<EnvironmentConfig> = OnceCell::new();

/// Validate and install the process-wide record
pub fn install(config: EnvironmentConfig) -> Result<&'static EnvironmentConfig> {
    config.validate()?;

    ENVIRONMENT
        .set(config)
        .map_err(|_| ConfigurationError::AlreadyInitialized)?;

    info!("Environment configuration installed");
    current()
}

/// Get the process-wide record, loading it on first use
pub fn current() -> Result<&'static EnvironmentConfig> {
    ENVIRONMENT.get_or_try_init(|| {
        let config = EnvironmentConfig::load(None)?;
        info!(
            production = config.production,
            api_server_url = %config.api_server_url,
            "Environment configuration loaded"
        );
        Ok(config)
    })
}

/// Get the process-wide record if it has been initialized
pub fn try_current() -> Option<&'static EnvironmentConfig> {
    ENVIRONMENT.get()
}
