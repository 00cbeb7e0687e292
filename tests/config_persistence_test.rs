use oauth_console::config::{
    AuthType, ConfigStore, ConfigUpdate, Environment, FileStorage, STORAGE_KEY,
};

#[tokio::test]
async fn draft_round_trips_through_a_fresh_store() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");

    let mut store = ConfigStore::with_file_storage(dir.path().to_path_buf());
    store.update(ConfigUpdate::ClientId("client-1".into()));
    store.update(ConfigUpdate::ClientSecret("secret-1".into()));
    store.update(ConfigUpdate::RedirectUri("https://app.example.com/cb".into()));
    store.update(ConfigUpdate::Environment(Environment::Uat));
    store.update_scopes(vec![
        "paotangid.citizen".to_string(),
        "paotangid.email".to_string(),
    ]);
    store.resolve_urls();
    assert!(store.save_to_storage().await);

    let saved = store.config().clone();
    drop(store);

    let mut reloaded = ConfigStore::with_file_storage(dir.path().to_path_buf());
    assert!(reloaded.load_from_storage().await);
    assert_eq!(reloaded.config(), &saved);
}

#[tokio::test]
async fn drafts_of_both_providers_survive_reload() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");

    let mut store = ConfigStore::with_file_storage(dir.path().to_path_buf());
    store.change_auth_type(AuthType::Nextpass);
    store.update(ConfigUpdate::ClientId("np-client".into()));
    assert!(store.save_to_storage().await);
    let saved = store.config().clone();

    let mut reloaded = ConfigStore::with_file_storage(dir.path().to_path_buf());
    assert!(reloaded.load_from_storage().await);
    assert_eq!(reloaded.config(), &saved);
    assert_eq!(reloaded.config().auth_type, AuthType::Nextpass);
}

#[tokio::test]
async fn clear_storage_removes_the_draft_file() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");

    let mut store = ConfigStore::with_file_storage(dir.path().to_path_buf());
    store.update(ConfigUpdate::ClientId("client-1".into()));
    assert!(store.save_to_storage().await);
    assert!(dir.path().join(format!("{}.json", STORAGE_KEY)).exists());

    assert!(store.clear_storage().await);
    assert!(!dir.path().join(format!("{}.json", STORAGE_KEY)).exists());

    let mut reloaded = ConfigStore::with_file_storage(dir.path().to_path_buf());
    assert!(!reloaded.load_from_storage().await);
    // clearing an already-absent draft stays a success
    assert!(store.clear_storage().await);
}

#[tokio::test]
async fn unparseable_draft_reports_false_and_keeps_the_current_config() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let draft_path = dir.path().join(format!("{}.json", STORAGE_KEY));
    tokio::fs::write(&draft_path, "{not json").await.unwrap();

    let mut store = ConfigStore::with_file_storage(dir.path().to_path_buf());
    store.update(ConfigUpdate::ClientId("client-1".into()));

    assert!(!store.load_from_storage().await);
    assert_eq!(store.config().client_id, "client-1");
}

#[tokio::test]
async fn save_into_a_missing_directory_reports_false() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let missing = dir.path().join("does-not-exist");

    let store = ConfigStore::with_file_storage(missing);
    assert!(!store.save_to_storage().await);
}

#[test]
fn file_storage_is_usable_directly() {
    // FileStorage is the default backend but the store accepts any
    // ConfigStorage implementation
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let _store = ConfigStore::new(Box::new(FileStorage::new(dir.path().to_path_buf())));
}
