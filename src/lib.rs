//! Dishdesk - local CRM for cable/DTH subscription operators
//!
//! Dishdesk keeps a single operator's subscriber roster in local JSON
//! storage: customer records, per-customer payment history, plan pricing,
//! and aggregate statistics, plus a public self-service account lookup.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use domain::entities::{Customer, CustomerDraft, CustomerUpdate, Purchase, Roster, RosterStats};
pub use domain::value_objects::{ConnectionStatus, PaymentMode, Provider, StatusFilter};
pub use error::{DishdeskError, DishdeskResult};
