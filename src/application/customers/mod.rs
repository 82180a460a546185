//! Customer Use Case
//!
//! Orchestrates the customer CRUD flow.
//!
//! This module handles:
//! - First-run seeding of the demo dataset
//! - Add/update/delete with all-or-nothing persistence
//! - Read-only queries (get, list, search, stats)

mod options;
mod seed;
mod use_case;

pub use options::PaymentInput;
pub use seed::demo_roster;
pub use use_case::CustomerUseCase;
