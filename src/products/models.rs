//! Product models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product.
///
/// Immutable once fetched; a re-fetch replaces the whole list. Cart lines
/// copy the product by value when created, so a refreshed catalog never
/// retroactively changes the price of items already in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog identifier.
    pub id: u64,

    /// Display title.
    pub title: String,

    /// Long-form description.
    pub description: String,

    /// Unit price in major currency units.
    pub price: Decimal,

    /// Advertised discount, as a percentage of the price.
    pub discount_percentage: Decimal,

    /// Average rating, 0 to 5.
    pub rating: f64,

    /// Units in stock.
    pub stock: u32,

    /// Brand name. Some catalog records omit it.
    #[serde(default)]
    pub brand: String,

    /// Category used by the client-side filter.
    pub category: String,

    /// Thumbnail image URI.
    pub thumbnail: String,

    /// Gallery image URIs.
    pub images: Vec<String>,
}
