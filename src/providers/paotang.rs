use crate::config::{AuthType, OAuthConfig};
use crate::errors::OAuthError;
use crate::providers::{
    build_auth_request_body, build_token_exchange_request, compose_web_auth_url, join_url,
    require_base, AuthRequestBody, AuthResponse, ProfileRecord, ProviderAdapter, TokenResponse,
};
use crate::relay::RelayClient;

const APP2APP_PATH: &str = "oauth2/app2app/auth";
const WEB_AUTH_PATH: &str = "oauth2/web/auth";
const TOKEN_PATH: &str = "oauth2/token";

/// Flow adapter for the Paotang provider.
///
/// Paotang speaks JSON on authorization initiation, form-encoded token
/// exchange, and expects the access token as a bearer header on profile
/// calls.
pub struct PaotangAdapter {
    relay: RelayClient,
}

impl PaotangAdapter {
    pub fn new(relay: RelayClient) -> Self {
        Self { relay }
    }
}

#[async_trait::async_trait]
impl ProviderAdapter for PaotangAdapter {
    fn auth_type(&self) -> AuthType {
        AuthType::Paotang
    }

    fn auth_request_body(&self, config: &OAuthConfig) -> Result<AuthRequestBody, OAuthError> {
        build_auth_request_body(config)
    }

    async fn initiate_app_to_app(&self, config: &OAuthConfig) -> Result<AuthResponse, OAuthError> {
        let base = require_base(config.auth_base_url(), "authorization")?;
        let body = self.auth_request_body(config)?;
        let upstream = join_url(&base, APP2APP_PATH);

        log::info!("initiating Paotang app-to-app auth against {}", upstream);
        let response = self.relay.relay_json(&upstream, &body).await?;
        if !response.is_success() {
            return Err(OAuthError::Upstream {
                status: response.status,
                body: response.body,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    fn qr_auth_url(&self, config: &OAuthConfig) -> Result<String, OAuthError> {
        let base = require_base(config.qr_base_url(), "QR authorization")?;
        let body = self.auth_request_body(config)?;
        compose_web_auth_url(&base, WEB_AUTH_PATH, &body)
    }

    async fn exchange_token(
        &self,
        config: &OAuthConfig,
        code: &str,
        state: Option<&str>,
    ) -> Result<TokenResponse, OAuthError> {
        let base = require_base(config.auth_base_url(), "token")?;
        let upstream = join_url(&base, TOKEN_PATH);
        let request = build_token_exchange_request(config, code, state);

        let response = self.relay.relay_form(&upstream, &request).await?;
        if !response.is_success() {
            return Err(OAuthError::TokenExchange {
                status: response.status,
                body: response.body,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    async fn fetch_profile(
        &self,
        config: &OAuthConfig,
        access_token: &str,
    ) -> Result<ProfileRecord, OAuthError> {
        let upstream = require_base(config.profile_url(), "profile")?;

        let response = self.relay.relay_profile(&upstream, access_token).await?;
        if !response.is_success() {
            return Err(OAuthError::ProfileFetch {
                status: response.status,
                body: response.body,
            });
        }
        Ok(ProfileRecord::Paotang(serde_json::from_str(&response.body)?))
    }
}
