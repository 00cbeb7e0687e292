use std::collections::BTreeMap;

use url::Url;

use crate::config::model::{Environment, OAuthConfig};

/// Derived validation result; never stored alongside the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// Field-keyed messages for inline display, keyed by draft field name
    pub errors: BTreeMap<&'static str, String>,
    pub is_valid: bool,
}

impl Validation {
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

pub fn validate(config: &OAuthConfig) -> Validation {
    let mut errors = BTreeMap::new();

    if config.client_id.trim().is_empty() {
        errors.insert("clientId", "Client ID is required".to_string());
    }

    if config.redirect_uri.trim().is_empty() {
        errors.insert("redirectUri", "Redirect URI is required".to_string());
    } else if Url::parse(&config.redirect_uri).is_err() {
        errors.insert("redirectUri", "Redirect URI must be a valid URL".to_string());
    }

    if config.scopes.is_empty() {
        errors.insert("scopes", "At least one scope is required".to_string());
    }

    if config.environment == Environment::Production && config.redirect_uri.contains("localhost") {
        errors.insert(
            "redirectUri",
            "Localhost URLs are not allowed in production".to_string(),
        );
    }

    Validation {
        is_valid: errors.is_empty(),
        errors,
    }
}
