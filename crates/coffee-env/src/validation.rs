//! Structural and deployment checks for [`EnvironmentConfig`]

use crate::config::EnvironmentConfig;
use crate::error::{ConfigurationError, Result, ValidationIssue};
use tracing::warn;
use url::{Host, Url};

/// How strict validation should be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Shape, URL syntax and non-empty values
    Structural,
    /// Structural checks plus placeholder detection and production hardening
    Deployment,
}

impl EnvironmentConfig {
    /// Validate the record's structure
    pub fn validate(&self) -> Result<()> {
        into_result(self.check(ValidationMode::Structural))
    }

    /// Validate the record as something that is about to be deployed
    pub fn validate_for_deployment(&self) -> Result<()> {
        let issues = self.check(ValidationMode::Deployment);
        if !issues.is_empty() {
            warn!(
                "Configuration is not deployable ({} issue(s))",
                issues.len()
            );
        }
        into_result(issues)
    }

    /// Collect every validation issue for the given mode
    pub fn check(&self, mode: ValidationMode) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        let api_server_url = check_http_url("apiServerUrl", &self.api_server_url, &mut issues);
        check_domain("auth0.url", &self.auth0.url, &mut issues);
        check_token("auth0.audience", &self.auth0.audience, &mut issues);
        check_token("auth0.clientId", &self.auth0.client_id, &mut issues);
        let callback_url =
            check_http_url("auth0.callbackURL", &self.auth0.callback_url, &mut issues);

        if mode == ValidationMode::Structural {
            return issues;
        }

        let fields = [
            ("apiServerUrl", self.api_server_url.as_str()),
            ("auth0.url", self.auth0.url.as_str()),
            ("auth0.audience", self.auth0.audience.as_str()),
            ("auth0.clientId", self.auth0.client_id.as_str()),
            ("auth0.callbackURL", self.auth0.callback_url.as_str()),
        ];
        for (field, value) in fields {
            // Empty values were already reported
            if !value.trim().is_empty() && is_placeholder(value) {
                issues.push(ValidationIssue::new(field, "still holds a placeholder value"));
            }
        }

        if self.production {
            for (field, url) in [
                ("apiServerUrl", api_server_url),
                ("auth0.callbackURL", callback_url),
            ] {
                let Some(url) = url else { continue };
                if url.scheme() != "https" {
                    issues.push(ValidationIssue::new(field, "must use https in production"));
                }
                if is_loopback(&url) {
                    issues.push(ValidationIssue::new(
                        field,
                        "must not point at a loopback host in production",
                    ));
                }
            }
        }

        issues
    }
}

fn into_result(issues: Vec<ValidationIssue>) -> Result<()> {
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ConfigurationError::Invalid { issues })
    }
}

fn check_http_url(
    field: &'static str,
    value: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<Url> {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::new(field, "must not be empty"));
        return None;
    }

    let url = match Url::parse(value) {
        Ok(url) => url,
        Err(e) => {
            issues.push(ValidationIssue::new(
                field,
                format!("is not a valid URL: {e}"),
            ));
            return None;
        }
    };

    if !matches!(url.scheme(), "http" | "https") {
        issues.push(ValidationIssue::new(
            field,
            format!("must use http or https, got {}", url.scheme()),
        ));
        return None;
    }

    if url.host().is_none() {
        issues.push(ValidationIssue::new(field, "must include a host"));
        return None;
    }

    Some(url)
}

fn check_token(field: &'static str, value: &str, issues: &mut Vec<ValidationIssue>) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::new(field, "must not be empty"));
    } else if value.chars().any(char::is_whitespace) {
        issues.push(ValidationIssue::new(field, "must not contain whitespace"));
    }
}

fn check_domain(field: &'static str, value: &str, issues: &mut Vec<ValidationIssue>) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::new(field, "must not be empty"));
    } else if value.contains("://") {
        issues.push(ValidationIssue::new(
            field,
            "must be a bare domain without a scheme",
        ));
    } else if !value.split('.').all(is_domain_label) {
        issues.push(ValidationIssue::new(
            field,
            format!("is not a valid domain name: {value:?}"),
        ));
    }
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Template markers that must be replaced before deploying
pub fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    let lower = value.to_ascii_lowercase();

    value.is_empty()
        || (value.starts_with('<') && value.ends_with('>'))
        || lower.starts_with("your-")
        || lower.starts_with("your_")
        || ["change-me", "changeme", "replace-me", "replaceme"]
            .iter()
            .any(|marker| lower.contains(marker))
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}
