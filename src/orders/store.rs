//! Order store.

use jiff::Timestamp;
use uuid::Uuid;

use crate::{
    orders::{NewOrder, Order, OrderBackend, OrderError, OrderStatus},
    status::Status,
};

/// State container for placed orders and the current order selection.
#[derive(Debug)]
pub struct OrderStore<B> {
    backend: B,
    orders: Vec<Order>,
    selected_order: Option<Order>,
    status: Status,
}

impl<B> OrderStore<B> {
    /// Create an empty store over the given backend.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            orders: Vec::new(),
            selected_order: None,
            status: Status::default(),
        }
    }

    /// Orders currently loaded, most recent first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// The currently selected order, if any.
    pub fn selected_order(&self) -> Option<&Order> {
        self.selected_order.as_ref()
    }

    /// Lifecycle of the most recent order operation.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Detach the current selection.
    pub fn clear_selected_order(&mut self) {
        self.selected_order = None;
    }

    /// Reset a recorded failure after the UI has surfaced it.
    pub fn clear_error(&mut self) {
        self.status.clear_error();
    }
}

impl<B: OrderBackend> OrderStore<B> {
    /// Create an order from the checkout payload.
    ///
    /// Synthesizes a fresh time-ordered identifier, stamps the order pending
    /// at the current time, and prepends it to the order list. Callers must
    /// guard on user presence before invoking; given a user id, the mock
    /// backend never rejects.
    pub async fn create_order(&mut self, new_order: NewOrder) -> Result<Order, OrderError> {
        self.status = Status::Pending;

        let order = Order {
            id: Uuid::now_v7(),
            user_id: new_order.user_id,
            items: new_order.items,
            total_amount: new_order.total_amount,
            total_items: new_order.total_items,
            status: OrderStatus::Pending,
            created_at: Timestamp::now(),
            delivery_address: new_order.delivery_address,
        };

        match self.backend.create_order(order).await {
            Ok(order) => {
                self.orders.insert(0, order.clone());
                self.status = Status::Succeeded;
                tracing::info!(order_id = %order.id, "order placed");
                Ok(order)
            }
            Err(error) => {
                let message = error.to_string();
                tracing::warn!(%message, "order creation failed");
                self.status = Status::Failed(message.clone());
                Err(OrderError::Backend(message))
            }
        }
    }

    /// Load all orders belonging to `user_id`.
    ///
    /// The order list is replaced with the filtered result on success only;
    /// a failure leaves the previously loaded orders in place.
    pub async fn fetch_orders(&mut self, user_id: u64) -> Result<(), OrderError> {
        self.status = Status::Pending;

        match self.backend.orders_for_user(user_id).await {
            Ok(orders) => {
                self.orders = orders;
                self.status = Status::Succeeded;
                Ok(())
            }
            Err(error) => {
                let message = error.to_string();
                tracing::warn!(%message, "fetching orders failed");
                self.status = Status::Failed(message.clone());
                Err(OrderError::Backend(message))
            }
        }
    }

    /// Load a single order into the selection.
    ///
    /// Fails with [`OrderError::NotFound`] when no order matches, leaving
    /// the previous selection unchanged.
    pub async fn fetch_order_by_id(&mut self, order_id: Uuid) -> Result<(), OrderError> {
        self.status = Status::Pending;

        let found = match self.backend.order_by_id(order_id).await {
            Ok(found) => found,
            Err(error) => {
                let message = error.to_string();
                tracing::warn!(%message, "fetching order failed");
                self.status = Status::Failed(message.clone());
                return Err(OrderError::Backend(message));
            }
        };

        match found {
            Some(order) => {
                self.selected_order = Some(order);
                self.status = Status::Succeeded;
                Ok(())
            }
            None => {
                let error = OrderError::NotFound;
                self.status = Status::Failed(error.to_string());
                Err(error)
            }
        }
    }
}
