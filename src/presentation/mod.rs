//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Rendering state as text views
//!
//! ## Structure
//!
//! - `cli` - clap command definitions
//! - `factory` - wires stores into use cases (dependency injection)
//! - `views` - plain-text renderers for each screen

pub mod cli;
pub mod factory;
pub mod views;

pub use cli::{Cli, Commands};
pub use factory::{create_auth_use_case, create_customer_use_case, state_dir};
pub use views::{DashboardView, DetailView, ListView, LookupView};
