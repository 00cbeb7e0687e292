/// Errors that can occur while driving a provider flow
#[derive(Debug, thiserror::Error)]
pub enum OAuthError {
    #[error("missing required configuration: {0}")]
    Configuration(String),
    #[error("upstream request failed: {status} - {body}")]
    Upstream { status: u16, body: String },
    #[error("token exchange failed: {status} - {body}")]
    TokenExchange { status: u16, body: String },
    #[error("profile fetch failed: {status} - {body}")]
    ProfileFetch { status: u16, body: String },
    #[error("authorization code not found in callback")]
    MissingCode,
    #[error("no access token available; exchange an authorization code first")]
    MissingToken,
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),
}

/// Errors from the draft storage backend. Never surfaced past the store,
/// which reports persistence outcomes as booleans.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}
