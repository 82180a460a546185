//! Use case factory
//!
//! Resolves the state directory and wires the JSON stores into use cases.

use std::path::PathBuf;

use crate::application::{AuthUseCase, CustomerUseCase};
use crate::infrastructure::{JsonCustomerStore, JsonSessionStore};

/// Where dishdesk keeps its state.
///
/// `DISHDESK_STATE_DIR` overrides the default `~/.dishdesk`, which is also
/// what the tests use to point the binary at a temp directory.
pub fn state_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("DISHDESK_STATE_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .map(|h| h.join(".dishdesk"))
        .unwrap_or_else(|| PathBuf::from(".dishdesk"))
}

/// Customer use case over the on-disk store
pub fn create_customer_use_case() -> CustomerUseCase<JsonCustomerStore> {
    CustomerUseCase::new(JsonCustomerStore::new(state_dir()))
}

/// Auth use case over the on-disk session flag
pub fn create_auth_use_case() -> AuthUseCase<JsonSessionStore> {
    AuthUseCase::new(JsonSessionStore::new(state_dir()))
}
