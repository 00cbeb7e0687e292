//! Configuration store for the OAuth console.
//!
//! Holds the canonical [`OAuthConfig`], applies field updates with
//! derived-URL invalidation, and persists drafts through an injected
//! storage backend.
//!
//! # Examples
//!
//! ```no_run
//! use oauth_console::config::{AuthType, ConfigStore, ConfigUpdate, MemoryStorage};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut store = ConfigStore::new(Box::new(MemoryStorage::new()));
//!
//!     store.update(ConfigUpdate::ClientId("my-client".into()));
//!     store.update(ConfigUpdate::RedirectUri("https://app.example.com/cb".into()));
//!     store.change_auth_type(AuthType::Nextpass);
//!
//!     if store.save_to_storage().await {
//!         println!("draft saved");
//!     }
//! }
//! ```

use std::path::PathBuf;

// Internal modules
mod model;
mod scopes;
mod storage;
mod validation;

// Public re-exports
pub use model::{
    generate_state_token, Acr, ApplicationType, AuthType, Environment, OAuthConfig, Prompt,
};
pub use scopes::{ScopeCatalog, ScopeEntry};
pub use storage::{ConfigStorage, FileStorage, MemoryStorage};
pub use validation::{validate, Validation};

/// The single durable-storage key for the configuration draft
pub const STORAGE_KEY: &str = "oauth_config_draft";

/// A single-field patch to the configuration.
///
/// The provider is deliberately absent: switching providers goes through
/// [`ConfigStore::change_auth_type`], which replaces the whole
/// configuration instead of patching one field.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigUpdate {
    Environment(Environment),
    AppType(ApplicationType),
    Endpoint(String),
    ClientId(String),
    ClientSecret(String),
    RedirectUri(String),
    Acr(Acr),
    Prompt(Prompt),
    State(String),
}

/// Owns the configuration and its persistence.
///
/// Constructed once per session and passed by reference to consumers; all
/// mutation goes through `&mut self`, so there are no concurrent writers
/// by construction.
pub struct ConfigStore {
    config: OAuthConfig,
    storage: Box<dyn ConfigStorage>,
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("config", &self.config)
            .field("storage", &"<storage>")
            .finish()
    }
}

impl ConfigStore {
    /// Create a store with default (Paotang) configuration and the given
    /// storage backend
    pub fn new(storage: Box<dyn ConfigStorage>) -> Self {
        Self {
            config: OAuthConfig::default(),
            storage,
        }
    }

    /// Create a store persisting drafts as JSON files under `storage_dir`
    pub fn with_file_storage(storage_dir: PathBuf) -> Self {
        Self::new(Box::new(FileStorage::new(storage_dir)))
    }

    pub fn config(&self) -> &OAuthConfig {
        &self.config
    }

    /// Scope catalog for the currently selected provider
    pub fn catalog(&self) -> ScopeCatalog {
        ScopeCatalog::for_provider(self.config.auth_type)
    }

    /// Apply a single-field patch. Patches to `environment`, `app_type`
    /// or `endpoint` clear the cached `url`/`url_qr` in the same
    /// transition, so a stale resolved URL can never be observed.
    pub fn update(&mut self, update: ConfigUpdate) {
        match update {
            ConfigUpdate::Environment(environment) => {
                self.config.environment = environment;
                self.invalidate_urls();
            }
            ConfigUpdate::AppType(app_type) => {
                self.config.app_type = app_type;
                self.invalidate_urls();
            }
            ConfigUpdate::Endpoint(endpoint) => {
                self.config.endpoint = endpoint;
                self.invalidate_urls();
            }
            ConfigUpdate::ClientId(client_id) => self.config.client_id = client_id,
            ConfigUpdate::ClientSecret(client_secret) => self.config.client_secret = client_secret,
            ConfigUpdate::RedirectUri(redirect_uri) => self.config.redirect_uri = redirect_uri,
            ConfigUpdate::Acr(acr) => self.config.acr = acr,
            ConfigUpdate::Prompt(prompt) => self.config.prompt = prompt,
            ConfigUpdate::State(state) => self.config.state = state,
        }
    }

    /// Replace the scope selection verbatim. Required-scope protection is
    /// the catalog's concern, see [`ScopeCatalog::toggle`].
    pub fn update_scopes(&mut self, scopes: Vec<String>) {
        self.config.scopes = scopes;
    }

    /// Switch providers. A no-op when `new_type` is already selected;
    /// otherwise the whole configuration is replaced with the new
    /// provider's defaults. Credentials and resolved URLs never carry
    /// across providers.
    pub fn change_auth_type(&mut self, new_type: AuthType) {
        if self.config.auth_type == new_type {
            return;
        }
        log::debug!(
            "switching provider {} -> {}",
            self.config.auth_type.as_str(),
            new_type.as_str()
        );
        self.config = OAuthConfig::provider_defaults(new_type);
    }

    /// Restore the default configuration and purge the stored draft
    pub async fn reset(&mut self) -> bool {
        self.config = OAuthConfig::default();
        self.clear_storage().await
    }

    /// Clear the cached resolved base URLs so a stale value can never be
    /// observed after a selector change.
    fn invalidate_urls(&mut self) {
        self.config.url.clear();
        self.config.url_qr.clear();
    }

    /// Recompute and cache the resolved base URLs for the current
    /// selectors
    pub fn resolve_urls(&mut self) {
        self.config.url = crate::endpoints::auth_base_url(
            self.config.auth_type,
            &self.config.endpoint,
            self.config.environment,
            self.config.app_type,
        );
        self.config.url_qr = crate::endpoints::qr_base_url(
            self.config.auth_type,
            &self.config.endpoint,
            self.config.environment,
            self.config.app_type,
        );
    }

    pub fn validation(&self) -> Validation {
        validate(&self.config)
    }

    pub fn is_valid(&self) -> bool {
        self.validation().is_valid
    }

    /// Persist the current configuration as a draft. Returns `false` and
    /// logs when the backend or serialization fails; never panics.
    pub async fn save_to_storage(&self) -> bool {
        let document = match serde_json::to_string(&self.config) {
            Ok(document) => document,
            Err(e) => {
                log::warn!("failed to serialize configuration draft: {}", e);
                return false;
            }
        };
        match self.storage.set(STORAGE_KEY, &document).await {
            Ok(()) => true,
            Err(e) => {
                log::warn!("failed to save configuration draft: {}", e);
                false
            }
        }
    }

    /// Replace the current configuration with the stored draft, if any.
    /// Returns `true` only when a draft was found and parsed.
    pub async fn load_from_storage(&mut self) -> bool {
        let document = match self.storage.get(STORAGE_KEY).await {
            Ok(Some(document)) => document,
            Ok(None) => return false,
            Err(e) => {
                log::warn!("failed to read configuration draft: {}", e);
                return false;
            }
        };
        match serde_json::from_str(&document) {
            Ok(config) => {
                self.config = config;
                true
            }
            Err(e) => {
                log::warn!("stored configuration draft is not parseable: {}", e);
                false
            }
        }
    }

    /// Remove the stored draft
    pub async fn clear_storage(&self) -> bool {
        match self.storage.remove(STORAGE_KEY).await {
            Ok(()) => true,
            Err(e) => {
                log::warn!("failed to clear configuration draft: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ConfigStore {
        ConfigStore::new(Box::new(MemoryStorage::new()))
    }

    #[test]
    fn update_field_reads_back() {
        let mut store = store();
        store.update(ConfigUpdate::ClientId("abc".into()));
        store.update(ConfigUpdate::ClientSecret("xyz".into()));
        store.update(ConfigUpdate::Acr(Acr::All));
        store.update(ConfigUpdate::Prompt(Prompt::Login));

        assert_eq!(store.config().client_id, "abc");
        assert_eq!(store.config().client_secret, "xyz");
        assert_eq!(store.config().acr, Acr::All);
        assert_eq!(store.config().prompt, Prompt::Login);
    }

    #[test]
    fn selector_updates_clear_cached_urls() {
        let mut store = store();
        store.resolve_urls();
        assert!(!store.config().url.is_empty());
        assert!(!store.config().url_qr.is_empty());

        store.update(ConfigUpdate::Environment(Environment::Uat));
        assert!(store.config().url.is_empty());
        assert!(store.config().url_qr.is_empty());

        store.resolve_urls();
        store.update(ConfigUpdate::AppType(ApplicationType::Sandbox));
        assert!(store.config().url.is_empty());

        store.resolve_urls();
        store.update(ConfigUpdate::Endpoint("paotangpass".into()));
        assert!(store.config().url.is_empty());
    }

    #[test]
    fn credential_updates_keep_cached_urls() {
        let mut store = store();
        store.resolve_urls();
        store.update(ConfigUpdate::ClientId("abc".into()));
        store.update(ConfigUpdate::RedirectUri("https://app.example.com/cb".into()));
        assert!(!store.config().url.is_empty());
    }

    #[test]
    fn change_auth_type_to_same_provider_is_a_no_op() {
        let mut store = store();
        store.update(ConfigUpdate::ClientId("abc".into()));
        let before = store.config().clone();

        store.change_auth_type(AuthType::Paotang);
        assert_eq!(store.config(), &before);
    }

    #[test]
    fn change_auth_type_resets_everything() {
        let mut store = store();
        store.update(ConfigUpdate::ClientId("abc".into()));
        store.update(ConfigUpdate::ClientSecret("xyz".into()));
        store.update(ConfigUpdate::Environment(Environment::Production));
        store.resolve_urls();

        store.change_auth_type(AuthType::Nextpass);

        let config = store.config();
        assert_eq!(config.auth_type, AuthType::Nextpass);
        assert!(config.client_id.is_empty());
        assert!(config.client_secret.is_empty());
        assert_eq!(config.environment, Environment::Development);
        assert!(config.url.is_empty());
        assert!(config.url_qr.is_empty());
        assert_eq!(config.scopes, vec!["anonymous".to_string()]);
    }

    #[test]
    fn update_scopes_replaces_verbatim() {
        let mut store = store();
        store.update_scopes(vec!["paotangid.email".into(), "paotangid.mobile".into()]);
        assert_eq!(
            store.config().scopes,
            vec!["paotangid.email", "paotangid.mobile"]
        );
    }

    #[tokio::test]
    async fn save_and_load_round_trip() {
        let mut store = store();
        store.update(ConfigUpdate::ClientId("abc".into()));
        store.update(ConfigUpdate::Environment(Environment::Uat));
        assert!(store.save_to_storage().await);

        let saved = store.config().clone();
        store.update(ConfigUpdate::ClientId("other".into()));

        assert!(store.load_from_storage().await);
        assert_eq!(store.config(), &saved);
    }

    #[tokio::test]
    async fn load_without_a_draft_reports_false() {
        let mut store = store();
        assert!(!store.load_from_storage().await);
    }

    #[tokio::test]
    async fn reset_restores_defaults_and_purges_the_draft() {
        let mut store = store();
        store.update(ConfigUpdate::ClientId("abc".into()));
        assert!(store.save_to_storage().await);

        assert!(store.reset().await);
        assert!(store.config().client_id.is_empty());
        assert_eq!(store.config().auth_type, AuthType::Paotang);
        assert!(!store.load_from_storage().await);
    }
}
