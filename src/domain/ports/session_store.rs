//! SessionStore port
//!
//! Persists the `is_authenticated` flag between invocations. Absent or
//! unreadable state reads as "not authenticated" (the public view).

use super::customer_store::StoreError;

pub trait SessionStore {
    fn is_authenticated(&self) -> bool;
    fn set_authenticated(&self, value: bool) -> Result<(), StoreError>;
}
