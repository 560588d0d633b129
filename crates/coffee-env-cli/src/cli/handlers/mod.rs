//! Command handlers for the coffee-env CLI

pub mod auth0;
pub mod config;
pub mod validate;
