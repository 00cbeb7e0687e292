use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::config::scopes::ScopeCatalog;
use crate::endpoints;

/// Identity provider selecting the flow adapter and scope catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
    Paotang,
    Nextpass,
}

impl AuthType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthType::Paotang => "paotang",
            AuthType::Nextpass => "nextpass",
        }
    }
}

/// Deployment environment selecting the endpoint table row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Uat,
    Staging,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 4] = [
        Environment::Development,
        Environment::Uat,
        Environment::Staging,
        Environment::Production,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Environment::Development => "Development",
            Environment::Uat => "UAT",
            Environment::Staging => "Staging",
            Environment::Production => "Production",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Environment::Development => "For development and testing",
            Environment::Uat => "User Acceptance Testing environment",
            Environment::Staging => "Pre-production environment",
            Environment::Production => "Live production environment",
        }
    }
}

/// Application type selecting the endpoint table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationType {
    Public,
    Sandbox,
}

impl ApplicationType {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationType::Public => "Public",
            ApplicationType::Sandbox => "Sandbox",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ApplicationType::Public => "Public client configuration",
            ApplicationType::Sandbox => "Sandbox testing environment",
        }
    }
}

/// Requested authentication context strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Acr {
    Pin,
    All,
}

impl Acr {
    pub fn as_str(&self) -> &'static str {
        match self {
            Acr::Pin => "PIN",
            Acr::All => "ALL",
        }
    }
}

/// OAuth `prompt` parameter; serialized as the empty string when unset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prompt {
    #[serde(rename = "")]
    None,
    #[serde(rename = "LOGIN")]
    Login,
}

impl Prompt {
    pub fn as_str(&self) -> &'static str {
        match self {
            Prompt::None => "",
            Prompt::Login => "LOGIN",
        }
    }
}

/// The canonical OAuth client configuration.
///
/// Serializes to the camelCase draft document kept in durable storage.
/// `url` and `url_qr` are caches of the resolved base URLs; any change to
/// `environment`, `app_type`, `endpoint` or `auth_type` clears them, and
/// flow code falls back to the endpoint tables whenever they are empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OAuthConfig {
    pub auth_type: AuthType,
    pub environment: Environment,
    #[serde(rename = "type")]
    pub app_type: ApplicationType,
    pub endpoint: String,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scopes: Vec<String>,
    pub acr: Acr,
    pub prompt: Prompt,
    pub url: String,
    #[serde(rename = "urlQR")]
    pub url_qr: String,
    pub state: String,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self::provider_defaults(AuthType::Paotang)
    }
}

impl OAuthConfig {
    /// Fresh configuration for the given provider: development/public
    /// selectors, the provider's named default endpoint, the required tier
    /// of its scope catalog and a newly generated anti-forgery state token.
    pub fn provider_defaults(auth_type: AuthType) -> Self {
        let endpoint = match auth_type {
            AuthType::Paotang => "paotangid".to_string(),
            // NextPass has a single implicit endpoint
            AuthType::Nextpass => String::new(),
        };

        Self {
            auth_type,
            environment: Environment::Development,
            app_type: ApplicationType::Public,
            endpoint,
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: String::new(),
            scopes: ScopeCatalog::for_provider(auth_type).required_ids(),
            acr: Acr::Pin,
            prompt: Prompt::None,
            url: String::new(),
            url_qr: String::new(),
            state: generate_state_token(),
        }
    }

    /// Base URL for token and app-to-app authorization calls. An explicitly
    /// resolved cache wins; otherwise the endpoint tables are consulted.
    /// Empty means the selector combination is unconfigured.
    pub fn auth_base_url(&self) -> String {
        if !self.url.is_empty() {
            return self.url.clone();
        }
        endpoints::auth_base_url(self.auth_type, &self.endpoint, self.environment, self.app_type)
    }

    /// Base URL for the QR/web redirect flow, same cache-then-table rule.
    pub fn qr_base_url(&self) -> String {
        if !self.url_qr.is_empty() {
            return self.url_qr.clone();
        }
        endpoints::qr_base_url(self.auth_type, &self.endpoint, self.environment, self.app_type)
    }

    /// Provider profile endpoint for the current selectors.
    pub fn profile_url(&self) -> String {
        endpoints::profile_url(self.auth_type, self.environment, self.app_type)
    }
}

/// Generate an opaque anti-forgery token: 32 random bytes, hex-encoded.
pub fn generate_state_token() -> String {
    let mut rng = rand::rng();
    let mut state_bytes = [0u8; 32];
    rng.fill_bytes(&mut state_bytes);
    hex::encode(state_bytes)
}
