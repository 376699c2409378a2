//! Cart models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::products::Product;

/// One product+quantity entry in a cart.
///
/// The product is copied by value when the line is created, so a later
/// catalog refresh never changes the price or details of a line already in
/// the cart. Quantity is always at least 1; a decrement to 0 removes the
/// line instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Snapshot of the product at add time.
    pub product: Product,

    /// Number of units, never 0.
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal: unit price times quantity.
    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}
