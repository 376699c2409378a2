//! Product catalog store errors.

use thiserror::Error;

/// Errors from [`ProductStore`](crate::products::ProductStore) operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No product with the given id exists in the currently fetched list.
    /// Selecting before the catalog is populated always fails this way.
    #[error("Product not found")]
    NotFound,

    /// The remote catalog fetch failed. The previous product list is kept.
    #[error("{0}")]
    Fetch(String),
}
