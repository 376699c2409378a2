//! Cross-store workflows.
//!
//! Stores never mutate each other. The sequences that span stores live
//! here, with their ordering (and therefore their failure behaviour)
//! spelled out instead of left to individual screens.

use thiserror::Error;

use crate::{
    auth::AuthStore,
    cart::CartStore,
    orders::{NewOrder, Order, OrderBackend, OrderError, OrderStore},
};

/// Errors from the checkout workflow.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Checkout requires a signed-in user.
    #[error("not signed in")]
    MissingUser,

    /// There is nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// Creating the order failed. The cart is left untouched.
    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Place an order from the current cart, then clear the cart.
///
/// The two steps are sequential, not atomic, and deliberately ordered: the
/// order is created first, so a failed order leaves the cart untouched, and
/// a cleared cart implies the order was stored.
///
/// # Errors
///
/// Fails fast with [`CheckoutError::MissingUser`] or
/// [`CheckoutError::EmptyCart`] before anything is submitted, and wraps any
/// [`OrderError`] from the order store.
pub async fn place_order<A, B: OrderBackend>(
    auth: &AuthStore<A>,
    cart: &mut CartStore,
    orders: &mut OrderStore<B>,
    delivery_address: impl Into<String>,
) -> Result<Order, CheckoutError> {
    let user = auth.user().ok_or(CheckoutError::MissingUser)?;

    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let order = orders
        .create_order(NewOrder {
            user_id: user.id,
            items: cart.lines().to_vec(),
            total_amount: cart.total_amount(),
            total_items: cart.total_items(),
            delivery_address: delivery_address.into(),
        })
        .await?;

    cart.clear_cart();

    tracing::debug!(order_id = %order.id, "checkout complete, cart cleared");

    Ok(order)
}

/// Sign out and clear the cart, in that order.
///
/// Session policy: a signed-out device keeps no cart.
pub fn logout<A>(auth: &mut AuthStore<A>, cart: &mut CartStore) {
    auth.logout();
    cart.clear_cart();
}
