//! Provider flow adapters.
//!
//! One adapter per identity provider behind the shared
//! [`ProviderAdapter`] contract. The providers agree on the four flow
//! operations but differ in URL paths, payload encodings and how the
//! access token travels on profile calls, so each keeps its own
//! implementation; [`adapter_for`] selects the variant once per session.

use url::Url;

// Internal modules
mod nextpass;
mod paotang;
mod types;

// Public re-exports
pub use nextpass::NextpassAdapter;
pub use paotang::PaotangAdapter;
pub use types::{
    Address, AuthRequestBody, AuthResponse, FullNameEn, FullNameTh, IdCardDetails,
    NextpassProfile, OfficeAddress, PaotangProfile, PaotangProfileData, ProfileRecord,
    TokenResponse, WorkProfile,
};

// Internal re-exports
pub(crate) use types::TokenExchangeRequest;

use crate::config::{AuthType, OAuthConfig};
use crate::errors::OAuthError;
use crate::relay::RelayClient;

/// Capability contract every provider adapter satisfies
#[async_trait::async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Provider this adapter drives
    fn auth_type(&self) -> AuthType;

    /// Build the authorization request body from the configuration
    fn auth_request_body(&self, config: &OAuthConfig) -> Result<AuthRequestBody, OAuthError>;

    /// Start the app-to-app flow; returns a deep link into the provider
    /// app
    async fn initiate_app_to_app(&self, config: &OAuthConfig) -> Result<AuthResponse, OAuthError>;

    /// Compose the hosted web-auth URL for the QR flow. The caller
    /// performs the navigation; once triggered it cannot be cancelled.
    fn qr_auth_url(&self, config: &OAuthConfig) -> Result<String, OAuthError>;

    /// Exchange an authorization code for tokens
    async fn exchange_token(
        &self,
        config: &OAuthConfig,
        code: &str,
        state: Option<&str>,
    ) -> Result<TokenResponse, OAuthError>;

    /// Retrieve the end-user profile. Callers must already hold an access
    /// token.
    async fn fetch_profile(
        &self,
        config: &OAuthConfig,
        access_token: &str,
    ) -> Result<ProfileRecord, OAuthError>;
}

/// Select the adapter for a provider, once per session
pub fn adapter_for(auth_type: AuthType, relay: RelayClient) -> Box<dyn ProviderAdapter> {
    match auth_type {
        AuthType::Paotang => Box::new(PaotangAdapter::new(relay)),
        AuthType::Nextpass => Box::new(NextpassAdapter::new(relay)),
    }
}

pub(crate) fn build_auth_request_body(
    config: &OAuthConfig,
) -> Result<AuthRequestBody, OAuthError> {
    if config.client_id.is_empty() || config.redirect_uri.is_empty() {
        return Err(OAuthError::Configuration(
            "clientId and redirectUri are required".to_string(),
        ));
    }
    Ok(AuthRequestBody {
        client_id: config.client_id.clone(),
        redirect_uri: config.redirect_uri.clone(),
        response_type: "code".to_string(),
        scope: config.scopes.clone(),
        acr: config.acr.as_str().to_string(),
        prompt: config.prompt.as_str().to_string(),
        state: config.state.clone(),
    })
}

pub(crate) fn build_token_exchange_request(
    config: &OAuthConfig,
    code: &str,
    state: Option<&str>,
) -> TokenExchangeRequest {
    TokenExchangeRequest {
        grant_type: "authorization_code".to_string(),
        code: code.to_string(),
        redirect_uri: config.redirect_uri.clone(),
        client_id: config.client_id.clone(),
        client_secret: config.client_secret.clone(),
        state: state.map(str::to_string),
        scope: config.scopes.join(" "),
    }
}

/// Join a resolved base with a provider path segment
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

/// An empty resolved base means the selector combination has no
/// configured upstream
pub(crate) fn require_base(base: String, what: &str) -> Result<String, OAuthError> {
    if base.is_empty() {
        Err(OAuthError::Configuration(format!(
            "{} base URL is not configured",
            what
        )))
    } else {
        Ok(base)
    }
}

/// Compose the web-auth redirect URL; empty optional fields are omitted
/// from the query string
pub(crate) fn compose_web_auth_url(
    base: &str,
    path: &str,
    body: &AuthRequestBody,
) -> Result<String, OAuthError> {
    let mut url = Url::parse(&join_url(base, path))?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("client_id", &body.client_id);
        query.append_pair("redirect_uri", &body.redirect_uri);
        query.append_pair("response_type", "code");
        let scope = body.scope.join(" ");
        if !scope.is_empty() {
            query.append_pair("scope", &scope);
        }
        if !body.state.is_empty() {
            query.append_pair("state", &body.state);
        }
        if !body.acr.is_empty() {
            query.append_pair("acr", &body.acr);
        }
        if !body.prompt.is_empty() {
            query.append_pair("prompt", &body.prompt);
        }
    }
    Ok(url.to_string())
}
