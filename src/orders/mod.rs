//! Order store.

mod backend;
mod errors;
mod models;
mod store;

pub use backend::{InMemoryOrderBackend, MockOrderBackend, OrderBackend};
pub use errors::OrderError;
pub use models::{NewOrder, Order, OrderStatus};
pub use store::OrderStore;
