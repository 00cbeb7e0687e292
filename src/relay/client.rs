use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::errors::OAuthError;

/// Response mirrored back through a relay endpoint
#[derive(Debug, Clone)]
pub struct RelayResponse {
    pub status: u16,
    pub body: String,
}

impl RelayResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Caller side of the proxy-relay contract.
///
/// Provider adapters never talk to an upstream directly; every request is
/// wrapped in a relay envelope so it originates server-side.
#[derive(Debug, Clone)]
pub struct RelayClient {
    base_url: String,
    http: Client,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .build()
            .expect("Failed to create HTTP client");
        Self::with_client(base_url, http)
    }

    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    /// `POST /auth-relay`: forward `fields` as a JSON body to
    /// `upstream_url`
    pub async fn relay_json(
        &self,
        upstream_url: &str,
        fields: &impl Serialize,
    ) -> Result<RelayResponse, OAuthError> {
        let envelope = envelope("tokenUrl", upstream_url, fields)?;
        self.post("auth-relay", &envelope).await
    }

    /// `POST /token-relay`: forward `fields` form-encoded to
    /// `upstream_url`
    pub async fn relay_form(
        &self,
        upstream_url: &str,
        fields: &impl Serialize,
    ) -> Result<RelayResponse, OAuthError> {
        let envelope = envelope("tokenUrl", upstream_url, fields)?;
        self.post("token-relay", &envelope).await
    }

    /// `POST /profile-relay`: empty upstream POST with a bearer header
    pub async fn relay_profile(
        &self,
        profile_url: &str,
        access_token: &str,
    ) -> Result<RelayResponse, OAuthError> {
        let envelope = serde_json::json!({
            "profileUrl": profile_url,
            "accessToken": access_token,
        });
        self.post("profile-relay", &envelope).await
    }

    async fn post(&self, endpoint: &str, envelope: &Value) -> Result<RelayResponse, OAuthError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("relaying through {}", url);
        let response = self.http.post(&url).json(envelope).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RelayResponse { status, body })
    }
}

fn envelope(
    upstream_key: &str,
    upstream_url: &str,
    fields: &impl Serialize,
) -> Result<Value, OAuthError> {
    let mut value = serde_json::to_value(fields)?;
    let Some(object) = value.as_object_mut() else {
        return Err(OAuthError::Configuration(
            "relay fields must serialize to a JSON object".to_string(),
        ));
    };
    object.insert(
        upstream_key.to_string(),
        Value::String(upstream_url.to_string()),
    );
    Ok(value)
}
