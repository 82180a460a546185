//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CustomerUseCase` - CRUD and queries over the persisted roster
//! - `AuthUseCase` - fixed-credential login/logout
//! - `SessionController` - screen state machine and transient notices

pub mod auth;
pub mod customers;
pub mod session;

pub use auth::AuthUseCase;
pub use customers::{demo_roster, CustomerUseCase, PaymentInput};
pub use session::{Intent, Notice, NoticeKind, Screen, SessionController, NOTICE_TTL_SECS};
