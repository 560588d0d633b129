//! # coffee-env
//!
//! Per-deployment environment configuration for the Coffee Shop client: the
//! backend API address, the deployment mode and the Auth0 settings used to
//! initialise an OAuth client.
//!
//! Values come from compile-time defaults, an optional TOML/JSON file and
//! `COFFEE_ENV_*` environment variables, in that order of priority. The loaded
//! record is validated and then shared read-only through [`environment`].

pub mod auth0;
pub mod config;
pub mod constants;
pub mod environment;
pub mod error;
pub mod logging;
pub mod validation;

pub use config::{Auth0Config, ConfigFormat, ConfigLoader, EnvironmentConfig, KEYS};
pub use error::{ConfigurationError, Result, ValidationIssue};
pub use validation::ValidationMode;
