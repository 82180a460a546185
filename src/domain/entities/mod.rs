//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Customer` - a subscriber record with its purchase history
//! - `Purchase` - a single payment, append-only once recorded
//! - `Roster` - the ordered customer collection and its operations

mod customer;
mod roster;

pub use customer::{Customer, CustomerDraft, CustomerUpdate, Purchase};
pub use roster::{Roster, RosterStats};
