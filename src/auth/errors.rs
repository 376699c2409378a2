//! Auth store errors.

use thiserror::Error;

/// Errors from [`AuthStore`](crate::auth::AuthStore) operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Login or registration was rejected. The message is the server's own
    /// when it provided one, otherwise a generic fallback.
    #[error("{0}")]
    Rejected(String),
}
