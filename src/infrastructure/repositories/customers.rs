//! JSON Customer Store
//!
//! Persists the whole roster at `<state dir>/customers.json`, rewriting the
//! file wholesale after each successful mutation. Saves take an exclusive
//! advisory lock so a stray second invocation cannot interleave writes.

use std::fs;
use std::path::PathBuf;

use fs2::FileExt;

use crate::domain::entities::Roster;
use crate::domain::ports::{CustomerStore, StoreError};

pub struct JsonCustomerStore {
    path: PathBuf,
}

impl JsonCustomerStore {
    pub fn new(state_dir: PathBuf) -> Self {
        Self {
            path: state_dir.join("customers.json"),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn load_from_disk(&self) -> Result<Roster, StoreError> {
        if !self.path.exists() {
            return Ok(Roster::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::Access {
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| StoreError::Corrupted {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn save_to_disk(&self, roster: &Roster) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Access {
                message: e.to_string(),
            })?;
        }

        let content = serde_json::to_string_pretty(roster).map_err(|e| StoreError::Serialization {
            message: e.to_string(),
        })?;

        fs::write(&self.path, content).map_err(|e| StoreError::Access {
            message: e.to_string(),
        })
    }
}

impl CustomerStore for JsonCustomerStore {
    fn load(&self) -> Result<Roster, StoreError> {
        self.load_from_disk()
    }

    fn save(&self, roster: &Roster) -> Result<(), StoreError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Access {
                message: e.to_string(),
            })?;
        }

        let lock_file = fs::File::create(&lock_path).map_err(|e| StoreError::Access {
            message: e.to_string(),
        })?;
        lock_file.lock_exclusive().map_err(|e| StoreError::Access {
            message: e.to_string(),
        })?;

        let result = self.save_to_disk(roster);

        let _ = fs2::FileExt::unlock(&lock_file);
        result
    }
}
