//! Domain Value Objects
//!
//! Immutable value types shared across the domain.
//! - `ConnectionStatus` / `StatusFilter` - subscription state and list filtering
//! - `Provider` - plan identity with its price table
//! - `PaymentMode` - how a purchase was paid

mod connection_status;
mod payment_mode;
mod provider;

pub use connection_status::{ConnectionStatus, StatusFilter};
pub use payment_mode::PaymentMode;
pub use provider::Provider;
