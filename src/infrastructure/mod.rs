//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - JSON-file stores for the roster and the session flag

pub mod repositories;

pub use repositories::{JsonCustomerStore, JsonSessionStore};
