//! Remote API clients.

mod auth;
mod catalog;

pub use auth::{AuthApi, HttpAuthApi, MockAuthApi};
pub use catalog::{CatalogApi, HttpCatalogApi, MockCatalogApi};

use thiserror::Error;

/// Errors that can occur when talking to the remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a failure message. The message is surfaced
    /// to the user verbatim.
    #[error("{0}")]
    Api(String),
}
