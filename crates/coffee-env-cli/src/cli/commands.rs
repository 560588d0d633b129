use clap::Subcommand;
use coffee_env::ConfigFormat;
use std::path::PathBuf;

/// Main CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the effective configuration
    Show,

    /// Get a single configuration value
    Get {
        /// Configuration key (e.g. apiServerUrl, auth0.clientId, auth0-client-id)
        key: String,
    },

    /// Write an example configuration file
    Init {
        /// File format, defaults to the one implied by the file extension
        #[arg(long, value_enum)]
        format: Option<ConfigFormat>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate a configuration document
    Validate {
        /// Document to parse strictly; every key must be present
        #[arg(long)]
        file: Option<PathBuf>,

        /// Also reject placeholders and insecure production settings
        #[arg(long)]
        deployment: bool,
    },

    /// Print the Auth0 login link
    LoginUrl {
        /// Path appended to the callback URL
        #[arg(long, default_value = "")]
        callback_path: String,
    },

    /// Print the derived Auth0 endpoints
    Endpoints,
}
