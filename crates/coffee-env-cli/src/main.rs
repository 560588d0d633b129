//! Main entry point for the coffee-env CLI

use clap::Parser;
use coffee_env_cli::cli::Args;
use coffee_env_cli::CliError;
use color_eyre::eyre::{eyre, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Disable location display (file paths and line numbers)
    color_eyre::config::HookBuilder::default()
        .display_location_section(false)
        .display_env_section(false)
        .install()?;

    // Quiet by default, enabled with -v or RUST_LOG
    let binary_name = env!("CARGO_BIN_NAME").replace('-', "_");
    let default_filter = format!("{binary_name}=info,coffee_env=info");
    coffee_env::logging::init_cli_logging(&args.verbosity, &default_filter)
        .map_err(|e| eyre!("Failed to initialize logging: {}", e))?;

    match args.run().await {
        Ok(()) => Ok(()),
        Err(CliError::ExitStatus(code)) => std::process::exit(code),
        Err(e) => Err(e.into()),
    }
}
