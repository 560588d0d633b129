//! Compile-time configuration defaults
//!
//! These values are baked into the binary by `build.rs` so that a client can
//! start without any external configuration file. Each one can be overridden
//! at build time through a `COFFEE_ENV_*` variable (or a `.env` file) and at
//! runtime through the layered loader in [`crate::config`].

include!(concat!(env!("OUT_DIR"), "/build_constants.rs"));

/// Prefix shared by every environment variable the loader reads
pub const ENV_PREFIX: &str = "COFFEE_ENV_";

/// Separator used to address nested keys from the environment
/// (`COFFEE_ENV_AUTH0__CLIENT_ID` -> `auth0.clientId`)
pub const ENV_NESTING_SEPARATOR: &str = "__";

/// Configuration file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "coffee-env.toml";

/// Hosted Auth0 tenants live under this domain
pub const AUTH0_TENANT_SUFFIX: &str = "auth0.com";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_defaults_are_populated() {
        assert!(!API_SERVER_URL.is_empty());
        assert!(!AUTH0_URL.is_empty());
        assert!(!AUTH0_AUDIENCE.is_empty());
        assert!(!AUTH0_CLIENT_ID.is_empty());
        assert!(!AUTH0_CALLBACK_URL.is_empty());
    }

    #[test]
    fn test_env_prefix_ends_with_separator() {
        assert!(ENV_PREFIX.ends_with('_'));
        assert!(!ENV_PREFIX.ends_with(ENV_NESTING_SEPARATOR));
    }
}
