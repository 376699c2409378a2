//! Product catalog store.

mod errors;
mod models;
mod store;

pub use errors::CatalogError;
pub use models::Product;
pub use store::{ALL_CATEGORIES, ProductStore};
