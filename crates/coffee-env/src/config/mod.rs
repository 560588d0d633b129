//! Environment configuration record for the Coffee Shop client
//!
//! The record mirrors the object a client is built against:
//!
//! ```text
//! {
//!   production: boolean,
//!   apiServerUrl: string,
//!   auth0: { url, audience, clientId, callbackURL }
//! }
//! ```
//!
//! It is created once at startup and never mutated afterwards.

mod loader;

pub use loader::{env_key_to_config_key, ConfigLoader};

use crate::constants;
use crate::error::{ConfigurationError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::debug;
use url::Url;

/// Every key of the record, in declaration order
pub const KEYS: [&str; 6] = [
    "production",
    "apiServerUrl",
    "auth0.url",
    "auth0.audience",
    "auth0.clientId",
    "auth0.callbackURL",
];

/// Serialization format of a configuration document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension, `.json` is JSON and anything else TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }

    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Deployment environment configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// Distinguishes production builds from local/staging ones
    pub production: bool,

    /// Base address of the backend API
    #[serde(rename = "apiServerUrl")]
    pub api_server_url: String,

    /// Identity provider settings
    pub auth0: Auth0Config,
}

/// Auth0 identity provider settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Auth0Config {
    /// Tenant domain prefix (e.g. `dev-92ouxsny.us`)
    pub url: String,

    /// Identifier of the protected API
    pub audience: String,

    /// Public client identifier of the application
    #[serde(rename = "clientId")]
    pub client_id: String,

    /// Redirect target after login
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            production: constants::PRODUCTION,
            api_server_url: constants::API_SERVER_URL.to_string(),
            auth0: Auth0Config::default(),
        }
    }
}

impl Default for Auth0Config {
    fn default() -> Self {
        Self {
            url: constants::AUTH0_URL.to_string(),
            audience: constants::AUTH0_AUDIENCE.to_string(),
            client_id: constants::AUTH0_CLIENT_ID.to_string(),
            callback_url: constants::AUTH0_CALLBACK_URL.to_string(),
        }
    }
}

impl EnvironmentConfig {
    /// Load configuration from defaults, file and environment, then validate it
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => <Self as ConfigLoader>::load_from_file(path)?,
            None => <Self as ConfigLoader>::load(None)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a complete TOML document; every key must be present
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConfigurationError::Parse {
            details: e.to_string(),
        })
    }

    /// Parse a complete JSON document; every key must be present
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ConfigurationError::Parse {
            details: e.to_string(),
        })
    }

    /// Parse a complete document in the given format
    pub fn from_str_with_format(content: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Toml => Self::from_toml_str(content),
            ConfigFormat::Json => Self::from_json_str(content),
        }
    }

    /// Strictly parse a file, without defaults or environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Parsing configuration file: {}", path.display());

        if !path.exists() {
            return Err(ConfigurationError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_str_with_format(&content, ConfigFormat::from_path(path))
    }

    /// Generate an example configuration document
    pub fn generate_example(format: ConfigFormat) -> Result<String> {
        Self::default().render(format)
    }

    /// Render the record in the given format
    pub fn render(&self, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Toml => self.to_toml_string(),
            ConfigFormat::Json => self.to_json_string(),
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigurationError::Serialize {
            details: e.to_string(),
        })
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigurationError::Serialize {
            details: e.to_string(),
        })
    }

    pub fn is_production(&self) -> bool {
        self.production
    }

    /// Parsed backend base URL
    pub fn api_server_url(&self) -> Result<Url> {
        Url::parse(&self.api_server_url).map_err(|e| ConfigurationError::InvalidUrl {
            field: "apiServerUrl",
            details: e.to_string(),
        })
    }

    /// Parsed post-login redirect URL
    pub fn callback_url(&self) -> Result<Url> {
        self.auth0.callback()
    }

    /// Get configuration value by key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "production" => Ok(self.production.to_string()),
            "apiServerUrl" | "api-server-url" | "api_server_url" => {
                Ok(self.api_server_url.clone())
            }
            "auth0.url" | "auth0-url" => Ok(self.auth0.url.clone()),
            "auth0.audience" | "auth0-audience" => Ok(self.auth0.audience.clone()),
            "auth0.clientId" | "auth0-client-id" => Ok(self.auth0.client_id.clone()),
            "auth0.callbackURL" | "auth0-callback-url" => Ok(self.auth0.callback_url.clone()),
            _ => Err(ConfigurationError::UnknownKey {
                key: key.to_string(),
            }),
        }
    }

    /// Get all configuration as dotted key-value pairs
    pub fn to_map(&self) -> BTreeMap<String, String> {
        KEYS.iter()
            .filter_map(|key| self.get(key).ok().map(|value| (key.to_string(), value)))
            .collect()
    }
}

impl Auth0Config {
    /// Parsed callback URL
    pub fn callback(&self) -> Result<Url> {
        Url::parse(&self.callback_url).map_err(|e| ConfigurationError::InvalidUrl {
            field: "auth0.callbackURL",
            details: e.to_string(),
        })
    }
}
