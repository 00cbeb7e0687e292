//! Proxy relay service.
//!
//! Same-origin HTTP endpoints that forward caller-specified requests to
//! caller-specified upstream URLs, so provider calls carrying client
//! secrets originate server-side instead of in the browser. Upstream
//! status and body are mirrored verbatim; any internal failure collapses
//! to a 500 with a fixed error payload.

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Map, Value};

mod client;

pub use client::{RelayClient, RelayResponse};

/// Shared state for the relay handlers
#[derive(Clone)]
pub struct RelayState {
    http: reqwest::Client,
    started: Instant,
    environment: String,
}

impl RelayState {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            started: Instant::now(),
            environment: environment.into(),
        }
    }
}

/// Build the relay router
pub fn router(state: RelayState) -> Router {
    Router::new()
        .route("/auth-relay", post(auth_relay))
        .route("/token-relay", post(token_relay))
        .route("/profile-relay", post(profile_relay))
        .route("/health", get(health))
        .with_state(state)
}

async fn auth_relay(State(state): State<RelayState>, Json(body): Json<Value>) -> Response {
    match forward_json(&state, body).await {
        Ok(response) => response,
        Err(e) => internal_error("auth-relay", e),
    }
}

async fn token_relay(State(state): State<RelayState>, Json(body): Json<Value>) -> Response {
    match forward_form(&state, body).await {
        Ok(response) => response,
        Err(e) => internal_error("token-relay", e),
    }
}

async fn profile_relay(
    State(state): State<RelayState>,
    Json(request): Json<ProfileRelayRequest>,
) -> Response {
    match forward_profile(&state, request).await {
        Ok(response) => response,
        Err(e) => internal_error("profile-relay", e),
    }
}

async fn health(State(state): State<RelayState>) -> Response {
    let payload = json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime": state.started.elapsed().as_secs_f64(),
        "environment": state.environment,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileRelayRequest {
    profile_url: String,
    access_token: String,
}

async fn forward_json(state: &RelayState, body: Value) -> anyhow::Result<Response> {
    let (upstream_url, fields) = split_envelope(body)?;
    log::debug!("auth-relay -> {}", upstream_url);
    let response = state.http.post(&upstream_url).json(&fields).send().await?;
    mirror(response).await
}

async fn forward_form(state: &RelayState, body: Value) -> anyhow::Result<Response> {
    let (upstream_url, fields) = split_envelope(body)?;

    // Re-encode as form data, omitting null fields
    let mut form: Vec<(String, String)> = Vec::new();
    for (key, value) in fields {
        if value.is_null() {
            continue;
        }
        form.push((key, form_value(&value)));
    }

    log::debug!("token-relay -> {}", upstream_url);
    let response = state.http.post(&upstream_url).form(&form).send().await?;
    mirror(response).await
}

async fn forward_profile(
    state: &RelayState,
    request: ProfileRelayRequest,
) -> anyhow::Result<Response> {
    log::debug!("profile-relay -> {}", request.profile_url);
    let response = state
        .http
        .post(&request.profile_url)
        .bearer_auth(&request.access_token)
        .json(&json!({}))
        .send()
        .await?;
    mirror(response).await
}

/// Split the relay envelope into the upstream URL and the fields to
/// forward
fn split_envelope(body: Value) -> anyhow::Result<(String, Map<String, Value>)> {
    let Value::Object(mut fields) = body else {
        anyhow::bail!("request body must be a JSON object");
    };
    match fields.remove("tokenUrl") {
        Some(Value::String(url)) if !url.is_empty() => Ok((url, fields)),
        _ => anyhow::bail!("missing tokenUrl"),
    }
}

fn form_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(form_value)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

/// Mirror the upstream status and JSON body back to the caller
async fn mirror(response: reqwest::Response) -> anyhow::Result<Response> {
    let status = StatusCode::from_u16(response.status().as_u16())?;
    let body: Value = response.json().await?;
    Ok((status, Json(body)).into_response())
}

fn internal_error(endpoint: &str, e: anyhow::Error) -> Response {
    log::error!("{} failed: {}", endpoint, e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "Internal server error"})),
    )
        .into_response()
}
