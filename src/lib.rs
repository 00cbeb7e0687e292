pub mod callback;
pub mod config;
pub mod endpoints;
pub mod errors;
pub mod providers;
pub mod relay;

pub use callback::{CallbackParams, CallbackSession, CallbackState, FailurePhase};
pub use config::{
    Acr, ApplicationType, AuthType, ConfigStore, ConfigUpdate, Environment, OAuthConfig, Prompt,
    ScopeCatalog,
};
pub use errors::{OAuthError, StorageError};
pub use providers::{adapter_for, ProviderAdapter, TokenResponse};
pub use relay::{RelayClient, RelayState};
