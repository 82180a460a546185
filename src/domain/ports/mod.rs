//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod customer_store;
pub mod session_store;

pub use customer_store::{CustomerStore, StoreError};
pub use session_store::SessionStore;
