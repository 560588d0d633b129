//! Configuration inspection and generation handlers

use crate::error::{CliError, Result};
use crate::output::{json_output, print_info, print_success, table_output};
use coffee_env::constants::DEFAULT_CONFIG_FILE;
use coffee_env::{ConfigFormat, ConfigLoader, EnvironmentConfig};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Load the effective configuration: defaults, then the file, then the environment.
///
/// An explicit `config_path` must exist. Without one, `coffee-env.toml` in the
/// working directory is used when present.
pub fn load_layered(config_path: Option<&Path>) -> Result<EnvironmentConfig> {
    let config = match config_path {
        Some(path) => {
            debug!("Loading layered configuration from: {}", path.display());
            <EnvironmentConfig as ConfigLoader>::load_from_file(path)?
        }
        None => {
            debug!("Loading layered configuration with optional {DEFAULT_CONFIG_FILE}");
            <EnvironmentConfig as ConfigLoader>::load(None)?
        }
    };
    Ok(config)
}

/// Where `init` writes: the extension follows the chosen format
fn init_target(config_path: &Path, format: ConfigFormat) -> PathBuf {
    if ConfigFormat::from_path(config_path) == format {
        config_path.to_path_buf()
    } else {
        config_path.with_extension(format.extension())
    }
}

/// Handle the `show` command
pub fn handle_show(config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = load_layered(config_path)?;

    if json {
        json_output(&config)
    } else {
        table_output::display_config(&config);
        Ok(())
    }
}

/// Handle the `get` command
pub fn handle_get(config_path: Option<&Path>, key: &str) -> Result<()> {
    let config = load_layered(config_path)?;
    println!("{}", config.get(key)?);
    Ok(())
}

/// Handle the `init` command - write an example configuration file
pub async fn handle_init(
    config_path: &Path,
    format: Option<ConfigFormat>,
    force: bool,
) -> Result<()> {
    let format = format.unwrap_or_else(|| ConfigFormat::from_path(config_path));
    let target = init_target(config_path, format);

    if target.exists() && !force {
        return Err(CliError::invalid_argument(format!(
            "{} already exists, pass --force to overwrite it",
            target.display()
        )));
    }

    let content = EnvironmentConfig::generate_example(format)?;

    // Ensure parent directory exists
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(&target, content).await?;

    info!("Example configuration written to {}", target.display());
    print_success(&format!(
        "Wrote {} configuration to {}",
        format,
        target.display()
    ));
    print_info("Replace the values for your deployment, then run 'coffee-env validate --deployment'");
    Ok(())
}
