//! Authentication store.

mod errors;
mod models;
mod store;

pub use errors::AuthError;
pub use models::{Credentials, Registration, Session, User};
pub use store::AuthStore;
