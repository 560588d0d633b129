use crate::cli::{commands::Commands, handlers};
use crate::error::Result;
use clap::Parser;
use clap_verbosity_flag::{OffLevel, Verbosity};
use coffee_env::constants::DEFAULT_CONFIG_FILE;
use std::path::{Path, PathBuf};

/// coffee-env - Coffee Shop environment configuration
#[derive(Parser, Debug)]
#[command(
    name = "coffee-env",
    version,
    about = "Inspect, generate and validate Coffee Shop environment configuration",
    long_about = "Inspect, generate and validate the environment configuration a Coffee Shop client is built against.

Values are layered: built-in defaults, then the configuration file, then
COFFEE_ENV_* environment variables (COFFEE_ENV_AUTH0__CLIENT_ID, ...).

EXAMPLES:
  coffee-env init                        # Write coffee-env.toml with local defaults
  coffee-env show                        # Show the effective configuration
  coffee-env get auth0.clientId          # Print a single value
  coffee-env validate --deployment       # Check before shipping
  coffee-env login-url --callback-path /tabs/user-page"
)]
pub struct Args {
    /// Configuration file path (TOML, or JSON with a .json extension).
    /// Must exist when given; otherwise coffee-env.toml is read if present
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub verbosity: Verbosity<OffLevel>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Args {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        let config = self.config.as_deref();
        match self.command {
            Commands::Show => handlers::config::handle_show(config, self.json),
            Commands::Get { key } => handlers::config::handle_get(config, &key),
            Commands::Init { format, force } => {
                let path = config.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
                handlers::config::handle_init(path, format, force).await
            }
            Commands::Validate { file, deployment } => {
                handlers::validate::handle_validate(
                    file.as_deref(),
                    config,
                    deployment,
                    self.json,
                )
            }
            Commands::LoginUrl { callback_path } => {
                handlers::auth0::handle_login_url(config, &callback_path)
            }
            Commands::Endpoints => handlers::auth0::handle_endpoints(config, self.json),
        }
    }
}
