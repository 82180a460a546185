//! JSON Session Store
//!
//! Persists the `is_authenticated` flag at `<state dir>/session.json`.
//! Anything unreadable degrades to "not authenticated".

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::ports::{SessionStore, StoreError};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    is_authenticated: bool,
}

pub struct JsonSessionStore {
    path: PathBuf,
}

impl JsonSessionStore {
    pub fn new(state_dir: PathBuf) -> Self {
        Self {
            path: state_dir.join("session.json"),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionStore for JsonSessionStore {
    fn is_authenticated(&self) -> bool {
        if !self.path.exists() {
            return false;
        }
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| serde_json::from_str::<SessionFile>(&content).ok())
            .map(|session| session.is_authenticated)
            .unwrap_or(false)
    }

    fn set_authenticated(&self, value: bool) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Access {
                message: e.to_string(),
            })?;
        }

        let content = serde_json::to_string_pretty(&SessionFile {
            is_authenticated: value,
        })
        .map_err(|e| StoreError::Serialization {
            message: e.to_string(),
        })?;

        fs::write(&self.path, content).map_err(|e| StoreError::Access {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_unauthenticated() {
        let dir = tempdir().unwrap();
        let store = JsonSessionStore::new(dir.path().to_path_buf());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn flag_round_trips() {
        let dir = tempdir().unwrap();
        let store = JsonSessionStore::new(dir.path().to_path_buf());

        store.set_authenticated(true).unwrap();
        assert!(store.is_authenticated());

        store.set_authenticated(false).unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn garbage_file_reads_as_unauthenticated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "???").unwrap();

        let store = JsonSessionStore::with_path(path);
        assert!(!store.is_authenticated());
    }
}
