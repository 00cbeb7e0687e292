use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use oauth_console::callback::{CallbackParams, CallbackSession, CallbackState, FailurePhase};
use oauth_console::config::{ApplicationType, AuthType, Environment, OAuthConfig};
use oauth_console::errors::OAuthError;
use oauth_console::providers::{adapter_for, ProfileRecord};
use oauth_console::relay::RelayClient;

fn paotang_production_config() -> OAuthConfig {
    let mut config = OAuthConfig::provider_defaults(AuthType::Paotang);
    config.environment = Environment::Production;
    config.app_type = ApplicationType::Public;
    config.client_id = "abc".to_string();
    config.client_secret = "xyz".to_string();
    config.redirect_uri = "https://app.example.com/callback".to_string();
    config.scopes = vec!["paotangid.citizen".to_string()];
    config.state = "st-1".to_string();
    config
}

#[test]
fn qr_auth_composes_the_production_web_auth_url() {
    let adapter = adapter_for(AuthType::Paotang, RelayClient::new("http://127.0.0.1:1"));
    let url = adapter.qr_auth_url(&paotang_production_config()).unwrap();

    assert!(url.starts_with("https://paotang-id.devops.krungthai.com/oauth2/web/auth?"));
    assert!(url.contains("client_id=abc"));
    assert!(url.contains("redirect_uri=https%3A%2F%2Fapp.example.com%2Fcallback"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("scope=paotangid.citizen"));
    assert!(url.contains("state=st-1"));
    assert!(url.contains("acr=PIN"));
    // empty prompt is omitted from the query string
    assert!(!url.contains("prompt="));
}

#[tokio::test]
async fn app_to_app_auth_returns_a_deep_link() {
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth-relay"))
        .and(body_partial_json(json!({
            "tokenUrl": "https://paotang-id.devops.krungthai.com/oauth2/app2app/auth",
            "client_id": "abc",
            "redirect_uri": "https://app.example.com/callback",
            "response_type": "code",
            "state": "st-1",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"deeplinkUrl": "paotang://auth/xyz"})),
        )
        .expect(1)
        .mount(&relay)
        .await;

    let adapter = adapter_for(AuthType::Paotang, RelayClient::new(relay.uri()));
    let response = adapter
        .initiate_app_to_app(&paotang_production_config())
        .await
        .unwrap();
    assert_eq!(response.deeplink_url, "paotang://auth/xyz");
}

#[tokio::test]
async fn app_to_app_auth_surfaces_upstream_failures() {
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth-relay"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "unsupported_response_type"})),
        )
        .mount(&relay)
        .await;

    let adapter = adapter_for(AuthType::Paotang, RelayClient::new(relay.uri()));
    let err = adapter
        .initiate_app_to_app(&paotang_production_config())
        .await
        .unwrap_err();
    match err {
        OAuthError::Upstream { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("unsupported_response_type"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn nextpass_app_to_app_uses_the_open_api_path() {
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth-relay"))
        .and(body_partial_json(json!({
            "tokenUrl":
                "https://next-pass.devops.krungthai.com/next-pass/v1/open-api/app2app/auth",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"deeplinkUrl": "nextpass://auth/1"})),
        )
        .expect(1)
        .mount(&relay)
        .await;

    let mut config = OAuthConfig::provider_defaults(AuthType::Nextpass);
    config.environment = Environment::Production;
    config.client_id = "abc".to_string();
    config.redirect_uri = "https://app.example.com/callback".to_string();

    let adapter = adapter_for(AuthType::Nextpass, RelayClient::new(relay.uri()));
    let response = adapter.initiate_app_to_app(&config).await.unwrap();
    assert_eq!(response.deeplink_url, "nextpass://auth/1");
}

#[tokio::test]
async fn token_exchange_goes_through_the_form_relay() {
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token-relay"))
        .and(body_partial_json(json!({
            "tokenUrl": "https://paotang-id.devops.krungthai.com/oauth2/token",
            "grant_type": "authorization_code",
            "code": "code-1",
            "client_id": "abc",
            "client_secret": "xyz",
            "scope": "paotangid.citizen",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "at-1",
            "token_type": "Bearer",
            "expires_in": 3600,
            "refresh_token": "rt-1",
        })))
        .expect(1)
        .mount(&relay)
        .await;

    let adapter = adapter_for(AuthType::Paotang, RelayClient::new(relay.uri()));
    let token = adapter
        .exchange_token(&paotang_production_config(), "code-1", Some("st-1"))
        .await
        .unwrap();
    assert_eq!(token.access_token, "at-1");
    assert_eq!(token.refresh_token.as_deref(), Some("rt-1"));
}

#[tokio::test]
async fn failed_exchange_is_retryable_through_the_session() {
    let relay = MockServer::start().await;
    // first attempt is rejected by the provider, the retry succeeds
    Mock::given(method("POST"))
        .and(path("/token-relay"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "invalid_client"})),
        )
        .up_to_n_times(1)
        .mount(&relay)
        .await;
    Mock::given(method("POST"))
        .and(path("/token-relay"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "at-1",
            "token_type": "Bearer",
            "expires_in": 3600,
        })))
        .mount(&relay)
        .await;

    let adapter = adapter_for(AuthType::Paotang, RelayClient::new(relay.uri()));
    let mut session = CallbackSession::new(paotang_production_config(), adapter);
    session
        .receive_callback(CallbackParams {
            code: Some("code-1".to_string()),
            state: Some("st-1".to_string()),
        })
        .unwrap();

    let err = session.exchange_token().await.unwrap_err();
    match err {
        OAuthError::TokenExchange { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid_client"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(matches!(
        session.state(),
        CallbackState::Failed {
            phase: FailurePhase::Exchange,
            ..
        }
    ));

    session.exchange_token().await.unwrap();
    assert_eq!(session.state(), &CallbackState::Exchanged);
}

#[tokio::test]
async fn paotang_profile_travels_as_a_bearer_header() {
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token-relay"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "at-1",
            "token_type": "Bearer",
            "expires_in": 3600,
        })))
        .mount(&relay)
        .await;
    Mock::given(method("POST"))
        .and(path("/profile-relay"))
        .and(body_partial_json(json!({
            "profileUrl": "https://paotang-id.devops.krungthai.com/oauth2/prd/api/v1/profile",
            "accessToken": "at-1",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "0000",
            "message": "success",
            "data": {"cid": "1100200334455", "email": "somchai@example.com"},
        })))
        .expect(1)
        .mount(&relay)
        .await;

    let adapter = adapter_for(AuthType::Paotang, RelayClient::new(relay.uri()));
    let mut session = CallbackSession::new(paotang_production_config(), adapter);
    session
        .receive_callback(CallbackParams {
            code: Some("code-1".to_string()),
            state: None,
        })
        .unwrap();
    session.exchange_token().await.unwrap();

    let record = session.fetch_profile().await.unwrap();
    match record {
        ProfileRecord::Paotang(profile) => {
            assert_eq!(profile.code.as_deref(), Some("0000"));
            let data = profile.data.as_ref().unwrap();
            assert_eq!(data.cid.as_deref(), Some("1100200334455"));
        }
        other => panic!("unexpected record: {other:?}"),
    }
    assert_eq!(session.state(), &CallbackState::Complete);
}

#[tokio::test]
async fn nextpass_profile_embeds_the_token_in_the_body() {
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth-relay"))
        .and(body_partial_json(json!({
            "tokenUrl":
                "https://next-pass.devops.krungthai.com/next-pass/v1/open-api/profile",
            "access_token": "at-1",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "thaiFirstName": "สมชาย",
            "gender": "M",
        })))
        .expect(1)
        .mount(&relay)
        .await;

    let mut config = OAuthConfig::provider_defaults(AuthType::Nextpass);
    config.environment = Environment::Production;
    config.client_id = "abc".to_string();
    config.redirect_uri = "https://app.example.com/callback".to_string();

    let adapter = adapter_for(AuthType::Nextpass, RelayClient::new(relay.uri()));
    let record = adapter.fetch_profile(&config, "at-1").await.unwrap();
    match record {
        ProfileRecord::Nextpass(profile) => {
            assert_eq!(profile.gender.as_deref(), Some("M"));
        }
        other => panic!("unexpected record: {other:?}"),
    }
}

#[tokio::test]
async fn profile_failures_carry_status_and_body() {
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/profile-relay"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"error": "insufficient_scope"})))
        .mount(&relay)
        .await;

    let adapter = adapter_for(AuthType::Paotang, RelayClient::new(relay.uri()));
    let err = adapter
        .fetch_profile(&paotang_production_config(), "at-1")
        .await
        .unwrap_err();
    match err {
        OAuthError::ProfileFetch { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("insufficient_scope"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn missing_code_short_circuits_without_a_network_call() {
    let relay = MockServer::start().await;
    // no mocks mounted: any request to the relay would 404 and any
    // expectation would be unmet, so reaching the network fails the test
    let adapter = adapter_for(AuthType::Paotang, RelayClient::new(relay.uri()));
    let mut session = CallbackSession::new(paotang_production_config(), adapter);

    let err = session
        .receive_callback(CallbackParams {
            code: None,
            state: Some("st-1".to_string()),
        })
        .unwrap_err();
    assert!(matches!(err, OAuthError::MissingCode));
    assert!(matches!(
        session.state(),
        CallbackState::Failed {
            phase: FailurePhase::Receive,
            ..
        }
    ));
    assert!(relay.received_requests().await.unwrap().is_empty());
}
