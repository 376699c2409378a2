//! Order store errors.

use thiserror::Error;

use crate::orders::OrderStatus;

/// Errors from [`OrderStore`](crate::orders::OrderStore) operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// No order with the requested identifier exists.
    #[error("Order not found")]
    NotFound,

    /// The requested status change is not a legal transition.
    #[error("cannot move a {from:?} order to {to:?}")]
    InvalidTransition {
        /// Status the order was in.
        from: OrderStatus,
        /// Status that was requested.
        to: OrderStatus,
    },

    /// The order backend failed. Prior store data is left untouched.
    #[error("{0}")]
    Backend(String),
}
