//! Operator session flag against the on-disk store.

use tempfile::tempdir;

use dishdesk::application::AuthUseCase;
use dishdesk::infrastructure::JsonSessionStore;
use dishdesk::DishdeskError;

#[test]
fn login_persists_across_store_instances() {
    let dir = tempdir().unwrap();
    let auth = AuthUseCase::new(JsonSessionStore::new(dir.path().to_path_buf()));
    assert!(!auth.is_authenticated());

    auth.login("admin", "password").unwrap();

    let reopened = AuthUseCase::new(JsonSessionStore::new(dir.path().to_path_buf()));
    assert!(reopened.is_authenticated());

    reopened.logout().unwrap();
    assert!(!auth.is_authenticated());
}

#[test]
fn failed_login_leaves_flag_unset() {
    let dir = tempdir().unwrap();
    let auth = AuthUseCase::new(JsonSessionStore::new(dir.path().to_path_buf()));

    let err = auth.login("admin", "letmein").unwrap_err();
    assert!(matches!(err, DishdeskError::InvalidCredentials));
    assert!(!auth.is_authenticated());
}
