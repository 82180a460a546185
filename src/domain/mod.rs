//! Domain Layer
//!
//! The core of Dishdesk - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Customer, Purchase, Roster)
//! - `value_objects/` - Immutable value types (ConnectionStatus, Provider, PaymentMode)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system
//! 2. **Pure Operations** - Roster operations are deterministic and testable
//! 3. **Ports & Adapters** - Persistence goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
