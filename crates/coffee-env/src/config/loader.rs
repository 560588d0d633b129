//! Layered configuration loading
//!
//! Priority, lowest to highest:
//! 1. compile-time defaults from `build.rs`
//! 2. the configuration file (TOML or JSON)
//! 3. `COFFEE_ENV_*` environment variables

use super::{ConfigFormat, EnvironmentConfig};
use crate::constants::{DEFAULT_CONFIG_FILE, ENV_NESTING_SEPARATOR, ENV_PREFIX};
use crate::error::{ConfigurationError, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml},
    value::{Dict, Map, Uncased, UncasedStr, Value},
    Figment, Metadata, Profile, Provider,
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loading behaviour shared by layered configuration records
pub trait ConfigLoader: Sized {
    /// Load from defaults, an optional file (falling back to the default
    /// file name) and the environment
    fn load(path: Option<PathBuf>) -> Result<Self>;

    /// Load from defaults, a file that must exist and the environment
    fn load_from_file(path: &Path) -> Result<Self>;

    /// Re-apply environment overrides with the given prefix on top of `config`
    fn apply_env_overrides(config: &mut Self, prefix: &str) -> Result<()>;
}

impl ConfigLoader for EnvironmentConfig {
    fn load(path: Option<PathBuf>) -> Result<Self> {
        let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut figment = Figment::from(Serialized::defaults(EnvironmentConfig::default()));
        if path.exists() {
            debug!("Merging configuration file: {}", path.display());
            figment = merge_file(figment, &path);
        } else {
            debug!(
                "Configuration file not found, using defaults: {}",
                path.display()
            );
        }

        let config = figment.merge(env_provider(ENV_PREFIX)).extract()?;
        debug!("Successfully loaded configuration");
        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigurationError::NotFound {
                path: path.to_path_buf(),
            });
        }

        debug!("Loading configuration from: {}", path.display());
        let figment = Figment::from(Serialized::defaults(EnvironmentConfig::default()));
        let config = merge_file(figment, path)
            .merge(env_provider(ENV_PREFIX))
            .extract()?;

        debug!("Successfully loaded configuration");
        Ok(config)
    }

    fn apply_env_overrides(config: &mut Self, prefix: &str) -> Result<()> {
        let figment =
            Figment::from(Serialized::defaults(config.clone())).merge(env_provider(prefix));

        *config = figment.extract()?;
        Ok(())
    }
}

fn merge_file(figment: Figment, path: &Path) -> Figment {
    match ConfigFormat::from_path(path) {
        ConfigFormat::Toml => figment.merge(Toml::file(path)),
        ConfigFormat::Json => figment.merge(Json::file(path)),
    }
}

fn env_provider(prefix: &str) -> EnvOverrides {
    EnvOverrides::new(prefix)
}

/// Environment overrides that keep values as the strings they were set to.
///
/// figment's `Env` provider parses `12345` into an integer, which a string
/// field then rejects (and `0042` would lose its leading zeros). Only
/// `production` is interpreted, with the same spellings `build.rs` accepts.
struct EnvOverrides {
    prefix: String,
    env: Env,
}

impl EnvOverrides {
    fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            env: Env::prefixed(prefix)
                .lowercase(false)
                .map(env_key_to_config_key),
        }
    }
}

impl Provider for EnvOverrides {
    fn metadata(&self) -> Metadata {
        Metadata::named(format!("`{}*` environment variable(s)", self.prefix))
    }

    fn data(&self) -> figment::Result<Map<Profile, Dict>> {
        let mut dict = Dict::new();
        for (key, raw) in self.env.iter() {
            let value = match key.as_str() {
                "production" => match parse_flag(&raw) {
                    Some(flag) => Value::from(flag),
                    None => Value::from(raw),
                },
                _ => Value::from(raw),
            };
            insert_nested(&mut dict, key.as_str(), value);
        }

        Ok(Profile::Default.collect(dict))
    }
}

/// Boolean spellings accepted for `COFFEE_ENV_PRODUCTION`, at build time and at runtime
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn insert_nested(dict: &mut Dict, key: &str, value: Value) {
    match key.split_once('.') {
        Some((head, rest)) => {
            let entry = dict
                .entry(head.to_string())
                .or_insert_with(|| Value::from(Dict::new()));
            if !matches!(entry, Value::Dict(..)) {
                *entry = Value::from(Dict::new());
            }
            if let Value::Dict(_, inner) = entry {
                insert_nested(inner, rest, value);
            }
        }
        None => {
            dict.insert(key.to_string(), value);
        }
    }
}

/// Map a prefix-stripped environment key onto the serialized key path.
///
/// Both `AUTH0__CLIENT_ID` and the build-time spelling `AUTH0_CLIENT_ID`
/// resolve to `auth0.clientId`. Unrecognised keys are passed through
/// lowercased so that extraction rejects them as unknown fields.
pub fn env_key_to_config_key(key: &UncasedStr) -> Uncased<'_> {
    let normalized = key
        .as_str()
        .to_ascii_lowercase()
        .replace(ENV_NESTING_SEPARATOR, ".");

    let mapped = match normalized.as_str() {
        "production" => "production",
        "api_server_url" | "apiserverurl" => "apiServerUrl",
        "auth0.url" | "auth0_url" => "auth0.url",
        "auth0.audience" | "auth0_audience" => "auth0.audience",
        "auth0.client_id" | "auth0_client_id" | "auth0.clientid" => "auth0.clientId",
        "auth0.callback_url" | "auth0_callback_url" | "auth0.callbackurl" => {
            "auth0.callbackURL"
        }
        _ => return Uncased::from(normalized),
    };

    Uncased::from(mapped.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_env_key_mapping() {
        let cases = [
            ("PRODUCTION", "production"),
            ("API_SERVER_URL", "apiServerUrl"),
            ("AUTH0__URL", "auth0.url"),
            ("AUTH0_URL", "auth0.url"),
            ("AUTH0__AUDIENCE", "auth0.audience"),
            ("AUTH0__CLIENT_ID", "auth0.clientId"),
            ("AUTH0_CALLBACK_URL", "auth0.callbackURL"),
            ("SOMETHING_ELSE", "something_else"),
        ];

        for (input, expected) in cases {
            let mapped = env_key_to_config_key(UncasedStr::new(input));
            assert_eq!(mapped.as_str(), expected, "mapping {input}");
        }
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        Jail::expect_with(|_jail| {
            let config = <EnvironmentConfig as ConfigLoader>::load(None).unwrap();
            assert_eq!(config, EnvironmentConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                    production = true
                    apiServerUrl = "https://api.coffee.example"
                "#,
            )?;

            let config = <EnvironmentConfig as ConfigLoader>::load(None).unwrap();
            assert!(config.production);
            assert_eq!(config.api_server_url, "https://api.coffee.example");
            assert_eq!(config.auth0, crate::config::Auth0Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "staging.json",
                r#"{ "apiServerUrl": "https://staging.coffee.example" }"#,
            )?;
            jail.set_env("COFFEE_ENV_API_SERVER_URL", "https://override.coffee.example");
            jail.set_env("COFFEE_ENV_AUTH0__CLIENT_ID", "env-client");
            jail.set_env("COFFEE_ENV_AUTH0_AUDIENCE", "coffee-api");

            let config =
                <EnvironmentConfig as ConfigLoader>::load_from_file(Path::new("staging.json"))
                    .unwrap();
            assert_eq!(config.api_server_url, "https://override.coffee.example");
            assert_eq!(config.auth0.client_id, "env-client");
            assert_eq!(config.auth0.audience, "coffee-api");
            Ok(())
        });
    }

    #[test]
    fn test_numeric_env_values_stay_strings() {
        Jail::expect_with(|jail| {
            jail.set_env("COFFEE_ENV_AUTH0__AUDIENCE", "12345");
            jail.set_env("COFFEE_ENV_AUTH0__CLIENT_ID", "0042");

            let config = <EnvironmentConfig as ConfigLoader>::load(None).unwrap();
            assert_eq!(config.auth0.audience, "12345");
            assert_eq!(config.auth0.client_id, "0042");
            Ok(())
        });
    }

    #[test]
    fn test_production_flag_spellings_match_build() {
        let cases = [
            ("1", true),
            ("yes", true),
            ("TRUE", true),
            ("0", false),
            ("no", false),
        ];

        for (raw, expected) in cases {
            Jail::expect_with(|jail| {
                jail.set_env("COFFEE_ENV_PRODUCTION", raw);

                let config = <EnvironmentConfig as ConfigLoader>::load(None).unwrap();
                assert_eq!(config.production, expected, "COFFEE_ENV_PRODUCTION={raw}");
                Ok(())
            });
        }
    }

    #[test]
    fn test_unparsable_production_flag_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("COFFEE_ENV_PRODUCTION", "maybe");

            let result = <EnvironmentConfig as ConfigLoader>::load(None);
            assert!(matches!(result, Err(ConfigurationError::Parse { .. })));
            Ok(())
        });
    }

    #[test]
    fn test_unknown_env_key_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("COFFEE_ENV_AUTH0__SECRET", "nope");

            let result = <EnvironmentConfig as ConfigLoader>::load(None);
            assert!(matches!(result, Err(ConfigurationError::Parse { .. })));
            Ok(())
        });
    }

    #[test]
    fn test_load_from_missing_file() {
        Jail::expect_with(|_jail| {
            let result =
                <EnvironmentConfig as ConfigLoader>::load_from_file(Path::new("absent.toml"));
            assert!(matches!(result, Err(ConfigurationError::NotFound { .. })));
            Ok(())
        });
    }

    #[test]
    fn test_apply_env_overrides() {
        Jail::expect_with(|jail| {
            jail.set_env("STAGE_PRODUCTION", "true");

            let mut config = EnvironmentConfig::default();
            <EnvironmentConfig as ConfigLoader>::apply_env_overrides(&mut config, "STAGE_")
                .unwrap();
            assert!(config.production);
            Ok(())
        });
    }
}
