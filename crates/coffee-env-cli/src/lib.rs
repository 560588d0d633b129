//! # coffee-env CLI
//!
//! Command-line companion of the `coffee-env` crate: shows the effective
//! environment configuration, generates example files, validates documents
//! before they ship and prints the Auth0 URLs a client will use.

pub mod cli;
pub mod error;
pub mod output;

pub use cli::*;
pub use error::*;
