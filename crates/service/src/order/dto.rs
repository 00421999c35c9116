use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use models::OrderStatus;
use serde::{Deserialize, Serialize};

use super::domain::{Order, OrderItem};
use crate::errors::ServiceError;
use crate::validation::{require_non_blank, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemDto {
    pub id: i64,
    pub book_id: i64,
    pub quantity: i32,
}

impl From<OrderItem> for OrderItemDto {
    fn from(i: OrderItem) -> Self { Self { id: i.id, book_id: i.book_id, quantity: i.quantity } }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    pub id: i64,
    pub user_id: i64,
    pub order_items: Vec<OrderItemDto>,
    pub order_date: DateTime<Utc>,
    pub total: BigDecimal,
    pub status: OrderStatus,
}

impl From<Order> for OrderDto {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            user_id: o.user_id,
            order_items: o.items.into_iter().map(OrderItemDto::from).collect(),
            order_date: o.order_date,
            total: o.total,
            status: o.status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub shipping_address: String,
}

impl Validate for CreateOrderRequest {
    fn validate(&self) -> Result<(), ServiceError> { require_non_blank("shipping_address", &self.shipping_address) }
}

/// Status values are checked by deserialization; nothing is left to validate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

impl Validate for UpdateOrderStatusRequest {
    fn validate(&self) -> Result<(), ServiceError> { Ok(()) }
}
