use crate::config::{AuthType, OAuthConfig};
use crate::errors::OAuthError;
use crate::providers::{
    build_auth_request_body, build_token_exchange_request, compose_web_auth_url, join_url,
    require_base, AuthRequestBody, AuthResponse, ProfileRecord, ProviderAdapter, TokenResponse,
};
use crate::relay::RelayClient;

const APP2APP_PATH: &str = "next-pass/v1/open-api/app2app/auth";
const WEB_AUTH_PATH: &str = "next-pass/v1/open-api/web/auth";
const TOKEN_PATH: &str = "next-pass/v1/open-api/token";

/// Flow adapter for the NextPass provider.
///
/// NextPass keeps everything under its open-api path prefix and takes the
/// access token inside the relayed profile body instead of a bearer
/// header. There is no hosted web-auth page, so the QR flow never
/// resolves a base URL.
pub struct NextpassAdapter {
    relay: RelayClient,
}

impl NextpassAdapter {
    pub fn new(relay: RelayClient) -> Self {
        Self { relay }
    }
}

#[async_trait::async_trait]
impl ProviderAdapter for NextpassAdapter {
    fn auth_type(&self) -> AuthType {
        AuthType::Nextpass
    }

    fn auth_request_body(&self, config: &OAuthConfig) -> Result<AuthRequestBody, OAuthError> {
        build_auth_request_body(config)
    }

    async fn initiate_app_to_app(&self, config: &OAuthConfig) -> Result<AuthResponse, OAuthError> {
        let base = require_base(config.auth_base_url(), "authorization")?;
        let body = self.auth_request_body(config)?;
        let upstream = join_url(&base, APP2APP_PATH);

        log::info!("initiating NextPass app-to-app auth against {}", upstream);
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
        // NextPass wants the token in the body, not in a header
        let body = serde_json::json!({ "access_token": access_token });

        let response = self.relay.relay_json(&upstream, &body).await?;
        if !response.is_success() {
            return Err(OAuthError::ProfileFetch {
                status: response.status,
                body: response.body,
            });
        }
        Ok(ProfileRecord::Nextpass(serde_json::from_str(
            &response.body,
        )?))
    }
}
