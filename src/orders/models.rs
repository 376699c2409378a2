//! Order models.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{cart::CartLine, orders::OrderError};

/// Order fulfilment status.
///
/// Orders move pending → confirmed → shipped → delivered, or to cancelled
/// from any non-terminal state. Delivered and cancelled are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed, not yet confirmed.
    Pending,
    /// Confirmed by the seller.
    Confirmed,
    /// Handed to the carrier.
    Shipped,
    /// Arrived. Terminal.
    Delivered,
    /// Cancelled before delivery. Terminal.
    Cancelled,
}

impl OrderStatus {
    /// Whether no further transitions are possible.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Whether `next` is a legal transition from this status.
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed)
                | (Self::Confirmed, Self::Shipped)
                | (Self::Shipped, Self::Delivered)
                | (
                    Self::Pending | Self::Confirmed | Self::Shipped,
                    Self::Cancelled
                )
        )
    }
}

/// An immutable snapshot of a placed order.
///
/// Everything except the status is fixed at creation time; the line items
/// are the cart lines as they were at submission, not live references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Time-ordered order identifier.
    pub id: Uuid,

    /// Owning user.
    pub user_id: u64,

    /// Cart lines at submission time.
    pub items: Vec<CartLine>,

    /// Total charged, copied from the cart at submission.
    pub total_amount: Decimal,

    /// Total unit count, copied from the cart at submission.
    pub total_items: u32,

    /// Fulfilment status.
    pub status: OrderStatus,

    /// When the order was placed.
    pub created_at: Timestamp,

    /// Free-text delivery address.
    pub delivery_address: String,
}

impl Order {
    /// Advance the fulfilment status.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::InvalidTransition`] when the move is not legal,
    /// including any move out of a terminal state.
    pub fn transition_to(&mut self, next: OrderStatus) -> Result<(), OrderError> {
        if !self.status.can_transition_to(next) {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }

        self.status = next;

        Ok(())
    }
}

/// Checkout payload used to create an order.
#[derive(Debug, Clone)]
pub struct NewOrder {
    /// Owning user.
    pub user_id: u64,

    /// Cart lines to snapshot into the order.
    pub items: Vec<CartLine>,

    /// Cart total at submission.
    pub total_amount: Decimal,

    /// Cart unit count at submission.
    pub total_items: u32,

    /// Free-text delivery address.
    pub delivery_address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_with_status(status: OrderStatus) -> Order {
        Order {
            id: Uuid::now_v7(),
            user_id: 1,
            items: Vec::new(),
            total_amount: Decimal::ZERO,
            total_items: 0,
            status,
            created_at: Timestamp::now(),
            delivery_address: String::new(),
        }
    }

    #[test]
    fn happy_path_transitions_are_legal() {
        let mut order = order_with_status(OrderStatus::Pending);

        assert!(order.transition_to(OrderStatus::Confirmed).is_ok());
        assert!(order.transition_to(OrderStatus::Shipped).is_ok());
        assert!(order.transition_to(OrderStatus::Delivered).is_ok());
        assert!(order.status.is_terminal());
    }

    #[test]
    fn cancellation_is_legal_from_any_non_terminal_state() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Shipped,
        ] {
            let mut order = order_with_status(status);
            assert!(
                order.transition_to(OrderStatus::Cancelled).is_ok(),
                "cancel from {status:?} should be legal"
            );
        }
    }

    #[test]
    fn terminal_states_reject_all_transitions() {
        for status in [OrderStatus::Delivered, OrderStatus::Cancelled] {
            let mut order = order_with_status(status);
            let result = order.transition_to(OrderStatus::Pending);

            assert!(
                matches!(result, Err(OrderError::InvalidTransition { .. })),
                "expected InvalidTransition out of {status:?}, got {result:?}"
            );
            assert_eq!(order.status, status, "status must be unchanged");
        }
    }

    #[test]
    fn skipping_a_stage_is_rejected() {
        let mut order = order_with_status(OrderStatus::Pending);

        let result = order.transition_to(OrderStatus::Delivered);

        assert!(
            matches!(result, Err(OrderError::InvalidTransition { .. })),
            "expected InvalidTransition, got {result:?}"
        );
    }
}
