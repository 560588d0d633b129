//! Auth0 endpoint derivation
//!
//! A client initialises its identity-provider SDK from the record; these
//! helpers turn the configured tenant prefix into the URLs it needs. No
//! request is ever made from here.

use crate::config::Auth0Config;
use crate::constants::AUTH0_TENANT_SUFFIX;
use crate::error::{ConfigurationError, Result};
use url::Url;

impl Auth0Config {
    /// Fully qualified tenant domain, e.g. `dev-92ouxsny.us.auth0.com`
    pub fn tenant_domain(&self) -> String {
        let domain = self.url.trim().trim_end_matches('/');
        let domain = domain
            .trim_start_matches("https://")
            .trim_start_matches("http://");

        if domain == AUTH0_TENANT_SUFFIX || domain.ends_with(&format!(".{AUTH0_TENANT_SUFFIX}")) {
            domain.to_string()
        } else {
            format!("{domain}.{AUTH0_TENANT_SUFFIX}")
        }
    }

    /// Token issuer, with the trailing slash Auth0 puts in `iss`
    pub fn issuer_url(&self) -> Result<Url> {
        self.tenant_url("/")
    }

    /// JSON Web Key Set used to verify tokens issued for this tenant
    pub fn jwks_url(&self) -> Result<Url> {
        self.tenant_url("/.well-known/jwks.json")
    }

    /// Login link for the implicit flow.
    ///
    /// `callback_path` is appended verbatim to the configured callback URL
    /// to form the `redirect_uri`.
    pub fn authorize_url(&self, callback_path: &str) -> Result<Url> {
        self.callback()?;
        let redirect_uri = format!("{}{}", self.callback_url, callback_path);

        let mut url = self.tenant_url("/authorize")?;
        url.query_pairs_mut()
            .append_pair("audience", &self.audience)
            .append_pair("response_type", "token")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &redirect_uri);
        Ok(url)
    }

    /// Logout link returning the user to the callback URL
    pub fn logout_url(&self) -> Result<Url> {
        self.callback()?;

        let mut url = self.tenant_url("/v2/logout")?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("returnTo", &self.callback_url);
        Ok(url)
    }

    fn tenant_url(&self, path: &str) -> Result<Url> {
        Url::parse(&format!("https://{}{}", self.tenant_domain(), path)).map_err(|e| {
            ConfigurationError::InvalidUrl {
                field: "auth0.url",
                details: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn auth0() -> Auth0Config {
        Auth0Config {
            url: "dev-92ouxsny.us".to_string(),
            audience: "coffee".to_string(),
            client_id: "eNShERhGNp1pd0sibs6tvTweBUqgJh6z".to_string(),
            callback_url: "https://127.0.0.1:8100".to_string(),
        }
    }

    #[test]
    fn test_tenant_domain() {
        let mut config = auth0();
        assert_eq!(config.tenant_domain(), "dev-92ouxsny.us.auth0.com");

        config.url = "https://dev-92ouxsny.us.auth0.com/".to_string();
        assert_eq!(config.tenant_domain(), "dev-92ouxsny.us.auth0.com");
    }

    #[test]
    fn test_issuer_and_jwks() {
        let config = auth0();
        assert_eq!(
            config.issuer_url().unwrap().as_str(),
            "https://dev-92ouxsny.us.auth0.com/"
        );
        assert_eq!(
            config.jwks_url().unwrap().as_str(),
            "https://dev-92ouxsny.us.auth0.com/.well-known/jwks.json"
        );
    }

    #[test]
    fn test_authorize_url() {
        let url = auth0().authorize_url("/tabs/user-page").unwrap();

        assert_eq!(url.host_str(), Some("dev-92ouxsny.us.auth0.com"));
        assert_eq!(url.path(), "/authorize");

        let params: HashMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(params["audience"], "coffee");
        assert_eq!(params["response_type"], "token");
        assert_eq!(params["client_id"], "eNShERhGNp1pd0sibs6tvTweBUqgJh6z");
        assert_eq!(params["redirect_uri"], "https://127.0.0.1:8100/tabs/user-page");
    }

    #[test]
    fn test_logout_url() {
        let url = auth0().logout_url().unwrap();
        let params: HashMap<String, String> = url.query_pairs().into_owned().collect();

        assert_eq!(url.path(), "/v2/logout");
        assert_eq!(params["returnTo"], "https://127.0.0.1:8100");
    }

    #[test]
    fn test_invalid_callback_rejected() {
        let mut config = auth0();
        config.callback_url = "not a url".to_string();

        assert!(matches!(
            config.authorize_url(""),
            Err(ConfigurationError::InvalidUrl {
                field: "auth0.callbackURL",
                ..
            })
        ));
    }
}
