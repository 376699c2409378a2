//! Shopping cart store.

use rust_decimal::Decimal;

use crate::{cart::CartLine, products::Product};

/// State container for the cart.
///
/// Lines are kept in insertion order and keyed by product id, one line per
/// product. The cached totals are recomputed from the full line list after
/// every mutation, never patched incrementally, so they cannot drift from
/// the lines they summarize.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
    total_items: u32,
    total_amount: Decimal,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from persisted lines, recomputing the totals.
    ///
    /// Lines with a zero quantity are dropped rather than trusted; the
    /// quantity invariant holds no matter what was on disk.
    pub fn from_lines(lines: impl Into<Vec<CartLine>>) -> Self {
        let mut lines: Vec<CartLine> = lines.into();
        lines.retain(|line| line.quantity > 0);

        let mut cart = Self {
            lines,
            total_items: 0,
            total_amount: Decimal::ZERO,
        };
        cart.recompute_totals();
        cart
    }

    /// Current lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of all line quantities.
    pub fn total_items(&self) -> u32 {
        self.total_items
    }

    /// Sum of price times quantity over all lines.
    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` units of `product`.
    ///
    /// An existing line for the same product is incremented; otherwise a new
    /// line is appended. Adding zero units is a no-op, so a zero-quantity
    /// line can never be created.
    pub fn add_to_cart(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine { product, quantity });
        }

        self.recompute_totals();
    }

    /// Increase a line's quantity by one. A product id with no line is a
    /// no-op.
    pub fn increment_quantity(&mut self, product_id: u64) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product_id)
        {
            line.quantity += 1;
            self.recompute_totals();
        }
    }

    /// Decrease a line's quantity by one, removing the line when it reaches
    /// zero. A product id with no line is a no-op.
    pub fn decrement_quantity(&mut self, product_id: u64) {
        let Some(index) = self
            .lines
            .iter()
            .position(|line| line.product.id == product_id)
        else {
            return;
        };

        if let Some(line) = self.lines.get_mut(index) {
            if line.quantity > 1 {
                line.quantity -= 1;
            } else {
                self.lines.remove(index);
            }
        }

        self.recompute_totals();
    }

    /// Remove the line for `product_id`, if present.
    pub fn remove_from_cart(&mut self, product_id: u64) {
        self.lines.retain(|line| line.product.id != product_id);
        self.recompute_totals();
    }

    /// Empty the cart and reset totals to zero.
    pub fn clear_cart(&mut self) {
        self.lines.clear();
        self.recompute_totals();
    }

    // Totals are always a fold over the current lines.
    fn recompute_totals(&mut self) {
        self.total_items = self.lines.iter().map(|line| line.quantity).sum();
        self.total_amount = self.lines.iter().map(CartLine::subtotal).sum();
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: u64, price: Decimal) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            description: String::new(),
            price,
            discount_percentage: Decimal::ZERO,
            rating: 4.0,
            stock: 50,
            brand: String::new(),
            category: "Test".to_owned(),
            thumbnail: String::new(),
            images: Vec::new(),
        }
    }

    fn assert_totals_match_lines(cart: &CartStore) {
        let items: u32 = cart.lines().iter().map(|line| line.quantity).sum();
        let amount: Decimal = cart.lines().iter().map(CartLine::subtotal).sum();

        assert_eq!(cart.total_items(), items, "total_items must equal the fold");
        assert_eq!(
            cart.total_amount(),
            amount,
            "total_amount must equal the fold"
        );
    }

    #[test]
    fn adding_same_product_merges_into_one_line() {
        let mut cart = CartStore::new();

        cart.add_to_cart(product(1, Decimal::from(10)), 2);
        cart.add_to_cart(product(1, Decimal::from(10)), 3);

        assert_eq!(cart.lines().len(), 1, "no duplicate lines per product");
        assert_eq!(cart.lines().first().map(|line| line.quantity), Some(5));
        assert_eq!(cart.total_items(), 5);
        assert_eq!(cart.total_amount(), Decimal::from(50));
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut cart = CartStore::new();

        cart.add_to_cart(product(3, Decimal::from(1)), 1);
        cart.add_to_cart(product(1, Decimal::from(1)), 1);
        cart.add_to_cart(product(2, Decimal::from(1)), 1);

        let ids: Vec<u64> = cart.lines().iter().map(|line| line.product.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn decrementing_to_zero_removes_the_line() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product(1, Decimal::from(10)), 1);

        cart.decrement_quantity(1);

        assert!(cart.is_empty(), "quantity 1 minus 1 removes the line");
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_amount(), Decimal::ZERO);
    }

    #[test]
    fn increment_and_decrement_of_absent_product_are_noops() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product(1, Decimal::from(10)), 2);

        cart.increment_quantity(99);
        cart.decrement_quantity(99);

        assert_eq!(cart.total_items(), 2);
        assert_totals_match_lines(&cart);
    }

    #[test]
    fn remove_is_unconditional_and_noop_when_absent() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product(1, Decimal::from(10)), 4);

        cart.remove_from_cart(1);
        cart.remove_from_cart(1);

        assert!(cart.is_empty());
        assert_totals_match_lines(&cart);
    }

    #[test]
    fn clear_resets_everything() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product(1, Decimal::from(10)), 2);
        cart.add_to_cart(product(2, Decimal::from(5)), 1);

        cart.clear_cart();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_amount(), Decimal::ZERO);
    }

    #[test]
    fn totals_hold_at_every_step_of_a_mixed_sequence() {
        let mut cart = CartStore::new();
        let first = product(1, Decimal::new(999, 2));
        let second = product(2, Decimal::new(1550, 2));

        cart.add_to_cart(first.clone(), 2);
        assert_totals_match_lines(&cart);

        cart.add_to_cart(second, 1);
        assert_totals_match_lines(&cart);

        cart.increment_quantity(2);
        assert_totals_match_lines(&cart);

        cart.decrement_quantity(1);
        assert_totals_match_lines(&cart);

        cart.add_to_cart(first, 3);
        assert_totals_match_lines(&cart);

        cart.remove_from_cart(2);
        assert_totals_match_lines(&cart);

        cart.decrement_quantity(1);
        assert_totals_match_lines(&cart);

        assert!(
            cart.lines().iter().all(|line| line.quantity >= 1),
            "the cart never holds a zero-quantity line"
        );
    }

    #[test]
    fn adding_zero_units_is_a_noop() {
        let mut cart = CartStore::new();

        cart.add_to_cart(product(1, Decimal::from(10)), 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn from_lines_recomputes_totals_and_drops_zero_quantities() {
        let lines = vec![
            CartLine {
                product: product(1, Decimal::from(10)),
                quantity: 2,
            },
            CartLine {
                product: product(2, Decimal::from(5)),
                quantity: 0,
            },
        ];

        let cart = CartStore::from_lines(lines);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_amount(), Decimal::from(20));
    }

    #[test]
    fn line_keeps_the_price_snapshot_from_first_add() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product(1, Decimal::from(100)), 1);

        // Re-adding after a catalog refresh with a new price only bumps the
        // quantity; the original snapshot stays on the line.
        cart.add_to_cart(product(1, Decimal::from(80)), 1);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total_amount(), Decimal::from(200));
    }
}
