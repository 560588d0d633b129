//! Auth0 endpoint handlers

use crate::cli::handlers::config::load_layered;
use crate::error::Result;
use crate::output::{json_output, print_link};
use std::collections::BTreeMap;
use std::path::Path;

/// Handle the `login-url` command
pub fn handle_login_url(config_path: Option<&Path>, callback_path: &str) -> Result<()> {
    let config = load_layered(config_path)?;
    config.validate()?;

    println!("{}", config.auth0.authorize_url(callback_path)?);
    Ok(())
}

/// Handle the `endpoints` command
pub fn handle_endpoints(config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = load_layered(config_path)?;
    config.validate()?;

    let auth0 = &config.auth0;
    let endpoints = [
        ("issuer", auth0.issuer_url()?),
        ("jwks", auth0.jwks_url()?),
        ("authorize", auth0.authorize_url("")?),
        ("logout", auth0.logout_url()?),
    ];

    if json {
        let map: BTreeMap<&str, String> = endpoints
            .iter()
            .map(|(name, url)| (*name, url.to_string()))
            .collect();
        return json_output(&map);
    }

    println!("Tenant: {}", auth0.tenant_domain());
    for (name, url) in &endpoints {
        print_link(name, url.as_str());
    }
    Ok(())
}
