//! CustomerStore port
//!
//! Durable storage for the whole roster. The collection is rewritten
//! wholesale after each successful mutation; there is exactly one writer.

use std::path::PathBuf;

use crate::domain::entities::Roster;

pub trait CustomerStore {
    fn load(&self) -> Result<Roster, StoreError>;
    fn save(&self, roster: &Roster) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Failed to access store: {message}")]
    Access { message: String },

    #[error("Failed to serialize store contents: {message}")]
    Serialization { message: String },

    #[error(
        "store file corrupted: {path}\n  → Fix: Delete the file and let dishdesk reseed it\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}
