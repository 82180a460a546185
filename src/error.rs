//! Error types for Dishdesk
//!
//! Uses `thiserror` for library errors. Every variant is recoverable: a
//! failed operation never touches the persisted collection.

use thiserror::Error;

use crate::domain::ports::StoreError;

/// Result type alias for Dishdesk operations
pub type DishdeskResult<T> = Result<T, DishdeskError>;

/// Main error type for Dishdesk operations
#[derive(Error, Debug)]
pub enum DishdeskError {
    /// Another customer already holds this account id
    #[error("account id '{account_id}' already exists")]
    DuplicateAccountId { account_id: String },

    /// No customer with the given id
    #[error("no customer with id '{id}'")]
    NotFound { id: String },

    /// Payment amount did not parse as a non-negative number
    #[error("invalid payment amount '{input}' - expected a non-negative number")]
    InvalidAmount { input: String },

    /// Username/password pair did not match the fixed operator credentials
    #[error("Invalid username or password.")]
    InvalidCredentials,

    /// Underlying key-value store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}
