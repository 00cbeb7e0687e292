//! Callback orchestration.
//!
//! Drives one authorization attempt from the redirect callback to a
//! retrieved profile: code receipt, operator-triggered token exchange,
//! operator-triggered profile fetch. Every retry is an explicit
//! re-invocation; nothing here schedules work or retries on its own.

use crate::config::OAuthConfig;
use crate::errors::OAuthError;
use crate::providers::{ProfileRecord, ProviderAdapter, TokenResponse};

/// Query parameters delivered to the redirect callback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}

/// Step of the flow a failure occurred in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePhase {
    Receive,
    Exchange,
    Profile,
}

/// Observable state of one authorization attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackState {
    Idle,
    CodeReceived,
    Exchanging,
    Exchanged,
    ProfileFetching,
    Complete,
    Failed {
        phase: FailurePhase,
        message: String,
    },
}

/// One authorization attempt against the active provider.
///
/// The adapter is selected once, by provider, when the session is
/// created; the configuration is snapshotted so edits on the console page
/// cannot change an attempt mid-flight.
pub struct CallbackSession {
    adapter: Box<dyn ProviderAdapter>,
    config: OAuthConfig,
    state: CallbackState,
    code: Option<String>,
    /// `state` parameter echoed by the provider. Captured for display;
    /// not compared against the value sent at authorization time.
    echoed_state: Option<String>,
    token: Option<TokenResponse>,
    profile: Option<ProfileRecord>,
}

impl CallbackSession {
    pub fn new(config: OAuthConfig, adapter: Box<dyn ProviderAdapter>) -> Self {
        Self {
            adapter,
            config,
            state: CallbackState::Idle,
            code: None,
            echoed_state: None,
            token: None,
            profile: None,
        }
    }

    pub fn state(&self) -> &CallbackState {
        &self.state
    }

    pub fn config(&self) -> &OAuthConfig {
        &self.config
    }

    pub fn token(&self) -> Option<&TokenResponse> {
        self.token.as_ref()
    }

    pub fn profile(&self) -> Option<&ProfileRecord> {
        self.profile.as_ref()
    }

    pub fn echoed_state(&self) -> Option<&str> {
        self.echoed_state.as_deref()
    }

    /// Accept the redirect callback. A non-empty `code` arms the session
    /// for token exchange; a missing code is terminal for this callback
    /// visit and the operator must restart the flow from the beginning.
    pub fn receive_callback(&mut self, params: CallbackParams) -> Result<(), OAuthError> {
        match params.code {
            Some(code) if !code.is_empty() => {
                log::debug!("authorization code received");
                self.code = Some(code);
                self.echoed_state = params.state;
                self.state = CallbackState::CodeReceived;
                Ok(())
            }
            _ => {
                self.state = CallbackState::Failed {
                    phase: FailurePhase::Receive,
                    message: OAuthError::MissingCode.to_string(),
                };
                Err(OAuthError::MissingCode)
            }
        }
    }

    /// Exchange the received code for tokens. Legal from `CodeReceived`,
    /// or again after a failed exchange (explicit operator retry).
    pub async fn exchange_token(&mut self) -> Result<&TokenResponse, OAuthError> {
        if !self.can_exchange() {
            return Err(OAuthError::Configuration(
                "no authorization code to exchange".to_string(),
            ));
        }
        let Some(code) = self.code.clone() else {
            return Err(OAuthError::MissingCode);
        };

        self.state = CallbackState::Exchanging;
        match self
            .adapter
            .exchange_token(&self.config, &code, self.echoed_state.as_deref())
            .await
        {
            Ok(token) => {
                log::info!("token exchange complete");
                self.state = CallbackState::Exchanged;
                Ok(self.token.insert(token))
            }
            Err(e) => {
                // The code is retained so the operator can retry
                self.state = CallbackState::Failed {
                    phase: FailurePhase::Exchange,
                    message: e.to_string(),
                };
                Err(e)
            }
        }
    }

    /// Fetch the end-user profile. Requires a completed exchange with a
    /// non-empty access token; rejected synchronously otherwise, without
    /// touching the network.
    pub async fn fetch_profile(&mut self) -> Result<&ProfileRecord, OAuthError> {
        let access_token = match self.token.as_ref() {
            Some(token) if !token.access_token.is_empty() => token.access_token.clone(),
            _ => return Err(OAuthError::MissingToken),
        };

        self.state = CallbackState::ProfileFetching;
        match self.adapter.fetch_profile(&self.config, &access_token).await {
            Ok(profile) => {
                log::info!("profile fetch complete");
                self.state = CallbackState::Complete;
                Ok(self.profile.insert(profile))
            }
            Err(e) => {
                self.state = CallbackState::Failed {
                    phase: FailurePhase::Profile,
                    message: e.to_string(),
                };
                Err(e)
            }
        }
    }

    fn can_exchange(&self) -> bool {
        self.code.is_some()
            && matches!(
                self.state,
                CallbackState::CodeReceived
                    | CallbackState::Failed {
                        phase: FailurePhase::Exchange,
                        ..
                    }
            )
    }
}
