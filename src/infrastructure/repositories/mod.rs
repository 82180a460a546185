//! Repository implementations over JSON files in the state directory

mod customers;
mod session;

pub use customers::JsonCustomerStore;
pub use session::JsonSessionStore;
