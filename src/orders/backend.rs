//! Order fulfilment backend.

use std::time::Duration;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rust_decimal::Decimal;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    api::ApiError,
    cart::CartLine,
    orders::{Order, OrderStatus},
    products::Product,
};

/// Where placed orders live.
///
/// The shipped implementation is the in-memory mock below; a real fulfilment
/// service slots in behind the same trait.
#[automock]
#[async_trait]
pub trait OrderBackend: Send + Sync {
    /// Persist a new order, returning the stored snapshot.
    async fn create_order(&self, order: Order) -> Result<Order, ApiError>;

    /// All orders belonging to the given user, most recent first.
    async fn orders_for_user(&self, user_id: u64) -> Result<Vec<Order>, ApiError>;

    /// Look up a single order.
    async fn order_by_id(&self, order_id: Uuid) -> Result<Option<Order>, ApiError>;
}

/// In-memory mock backend with simulated network latency.
///
/// Creation never fails; callers guard on user presence before invoking.
#[derive(Debug)]
pub struct InMemoryOrderBackend {
    orders: Mutex<Vec<Order>>,
    latency: Duration,
}

impl InMemoryOrderBackend {
    /// Create an empty backend that sleeps `latency` per operation.
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self {
            orders: Mutex::new(Vec::new()),
            latency,
        }
    }

    /// Create a backend pre-seeded with the demonstration orders.
    #[must_use]
    pub fn with_demo_orders(latency: Duration) -> Self {
        Self {
            orders: Mutex::new(demo_orders()),
            latency,
        }
    }
}

#[async_trait]
impl OrderBackend for InMemoryOrderBackend {
    async fn create_order(&self, order: Order) -> Result<Order, ApiError> {
        tokio::time::sleep(self.latency).await;

        let mut orders = self.orders.lock().await;
        orders.insert(0, order.clone());

        Ok(order)
    }

    async fn orders_for_user(&self, user_id: u64) -> Result<Vec<Order>, ApiError> {
        tokio::time::sleep(self.latency).await;

        let orders = self.orders.lock().await;

        Ok(orders
            .iter()
            .filter(|order| order.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn order_by_id(&self, order_id: Uuid) -> Result<Option<Order>, ApiError> {
        tokio::time::sleep(self.latency).await;

        let orders = self.orders.lock().await;

        Ok(orders.iter().find(|order| order.id == order_id).cloned())
    }
}

fn demo_product(id: u64, title: &str, category: &str, price: Decimal, stock: u32) -> Product {
    Product {
        id,
        title: title.to_owned(),
        description: String::new(),
        price,
        discount_percentage: Decimal::ZERO,
        rating: 4.5,
        stock,
        brand: String::new(),
        category: category.to_owned(),
        thumbnail: format!("https://via.placeholder.com/300x300?text={title}"),
        images: Vec::new(),
    }
}

// 2024-01-15T10:30:00Z and 2024-01-20T14:45:00Z.
const DELIVERED_AT: Timestamp = Timestamp::constant(1_705_314_600, 0);
const SHIPPED_AT: Timestamp = Timestamp::constant(1_705_761_900, 0);

// Demonstration history shown to user 1 before they place anything. The
// delivered order predates the shipped one.
fn demo_orders() -> Vec<Order> {
    let iphone = demo_product(1, "iPhone 15 Pro", "Electronics", Decimal::from(999), 10);
    let shoes = demo_product(3, "Nike Air Max", "Footwear", Decimal::from(150), 25);

    vec![
        Order {
            id: Uuid::now_v7(),
            user_id: 1,
            items: vec![CartLine {
                product: iphone,
                quantity: 1,
            }],
            total_amount: Decimal::from(999),
            total_items: 1,
            status: OrderStatus::Delivered,
            created_at: DELIVERED_AT,
            delivery_address: "123 Main St, City, State 12345".to_owned(),
        },
        Order {
            id: Uuid::now_v7(),
            user_id: 1,
            items: vec![CartLine {
                product: shoes,
                quantity: 2,
            }],
            total_amount: Decimal::from(300),
            total_items: 2,
            status: OrderStatus::Shipped,
            created_at: SHIPPED_AT,
            delivery_address: "123 Main St, City, State 12345".to_owned(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn demo_orders_belong_to_user_one() -> TestResult {
        let backend = InMemoryOrderBackend::with_demo_orders(Duration::ZERO);

        let mine = backend.orders_for_user(1).await?;
        let theirs = backend.orders_for_user(2).await?;

        assert_eq!(mine.len(), 2);
        assert!(theirs.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn demo_history_has_the_delivered_order_before_the_shipped_one() -> TestResult {
        let backend = InMemoryOrderBackend::with_demo_orders(Duration::ZERO);

        let orders = backend.orders_for_user(1).await?;

        let delivered = orders
            .iter()
            .find(|order| order.status == OrderStatus::Delivered);
        let shipped = orders
            .iter()
            .find(|order| order.status == OrderStatus::Shipped);

        match (delivered, shipped) {
            (Some(delivered), Some(shipped)) => assert!(
                delivered.created_at < shipped.created_at,
                "delivered ({}) must predate shipped ({})",
                delivered.created_at,
                shipped.created_at
            ),
            other => panic!("expected both demo orders, got {other:?}"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn unknown_order_id_returns_none() -> TestResult {
        let backend = InMemoryOrderBackend::with_demo_orders(Duration::ZERO);

        let found = backend.order_by_id(Uuid::now_v7()).await?;

        assert!(found.is_none());

        Ok(())
    }
}
