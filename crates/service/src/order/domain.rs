use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use models::OrderStatus;

use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub status: OrderStatus,
    pub total: BigDecimal,
    pub order_date: DateTime<Utc>,
    pub shipping_address: String,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub book_id: i64,
    pub quantity: i32,
    /// Unit price captured when the order was placed.
    pub price: BigDecimal,
}

/// Order about to be persisted; ids and date are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: i64,
    pub shipping_address: String,
    pub total: BigDecimal,
    pub items: Vec<NewOrderItem>,
}

#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub book_id: i64,
    pub quantity: i32,
    pub price: BigDecimal,
}

impl From<models::order_item::Model> for OrderItem {
    fn from(m: models::order_item::Model) -> Self {
        Self { id: m.id, order_id: m.order_id, book_id: m.book_id, quantity: m.quantity, price: m.price }
    }
}

impl Order {
    /// Assemble from stored rows. A status string outside the known set is a
    /// storage fault, not a client error.
    pub fn from_rows(order: models::order::Model, items: Vec<models::order_item::Model>) -> Result<Self, ServiceError> {
        let status = order
            .status
            .parse()
            .map_err(|e| ServiceError::Db(format!("order {} has unreadable status: {e}", order.id)))?;
        Ok(Self {
            id: order.id,
            user_id: order.user_id,
            status,
            total: order.total,
            order_date: order.order_date.with_timezone(&Utc),
            shipping_address: order.shipping_address,
            items: items.into_iter().map(OrderItem::from).collect(),
        })
    }
}
