use async_trait::async_trait;
use models::OrderStatus;

use super::domain::{NewOrder, Order, OrderItem};
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Storage gateway for orders and their items.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist the order and all of its items atomically.
    async fn create(&self, order: NewOrder) -> Result<Order, ServiceError>;
    /// Newest first.
    async fn find_by_user(&self, user_id: i64, page: Pagination) -> Result<Vec<Order>, ServiceError>;
    async fn find_by_id(&self, order_id: i64) -> Result<Option<Order>, ServiceError>;
    async fn find_items(&self, order_id: i64, page: Pagination) -> Result<Vec<OrderItem>, ServiceError>;
    async fn find_item(&self, order_id: i64, item_id: i64) -> Result<Option<OrderItem>, ServiceError>;
    async fn update_status(&self, order_id: i64, status: OrderStatus) -> Result<Option<Order>, ServiceError>;
}

pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use tokio::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryOrderRepository {
        orders: Mutex<BTreeMap<i64, Order>>,
        next_order_id: AtomicI64,
        next_item_id: AtomicI64,
    }

    #[async_trait]
    impl OrderRepository for InMemoryOrderRepository {
        async fn create(&self, new: NewOrder) -> Result<Order, ServiceError> {
            let id = self.next_order_id.fetch_add(1, Ordering::SeqCst) + 1;
            let items = new
                .items
                .into_iter()
                .map(|i| OrderItem {
                    id: self.next_item_id.fetch_add(1, Ordering::SeqCst) + 1,
                    order_id: id,
                    book_id: i.book_id,
                    quantity: i.quantity,
                    price: i.price,
                })
                .collect();
            let order = Order {
                id,
                user_id: new.user_id,
                status: OrderStatus::Pending,
                total: new.total,
                order_date: chrono::Utc::now(),
                shipping_address: new.shipping_address,
                items,
            };
            self.orders.lock().await.insert(id, order.clone());
            Ok(order)
        }

        async fn find_by_user(&self, user_id: i64, page: Pagination) -> Result<Vec<Order>, ServiceError> {
            let (skip, take) = page.window();
            let orders = self.orders.lock().await;
            Ok(orders.values().rev().filter(|o| o.user_id == user_id).skip(skip).take(take).cloned().collect())
        }

        async fn find_by_id(&self, order_id: i64) -> Result<Option<Order>, ServiceError> {
            Ok(self.orders.lock().await.get(&order_id).cloned())
        }

        async fn find_items(&self, order_id: i64, page: Pagination) -> Result<Vec<OrderItem>, ServiceError> {
            let (skip, take) = page.window();
            let orders = self.orders.lock().await;
            Ok(orders
                .get(&order_id)
                .map(|o| o.items.iter().skip(skip).take(take).cloned().collect())
                .unwrap_or_default())
        }

        async fn find_item(&self, order_id: i64, item_id: i64) -> Result<Option<OrderItem>, ServiceError> {
            let orders = self.orders.lock().await;
            Ok(orders.get(&order_id).and_then(|o| o.items.iter().find(|i| i.id == item_id).cloned()))
        }

        async fn update_status(&self, order_id: i64, status: OrderStatus) -> Result<Option<Order>, ServiceError> {
            let mut orders = self.orders.lock().await;
            Ok(orders.get_mut(&order_id).map(|o| {
                o.status = status;
                o.clone()
            }))
        }
    }
}
