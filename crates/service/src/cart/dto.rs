use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::domain::{CartLine, MAX_QUANTITY};
use crate::errors::ServiceError;
use crate::validation::{require_at_most, require_positive, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemDto {
    pub id: i64,
    pub book_id: i64,
    pub book_title: String,
    pub price: BigDecimal,
    pub quantity: i32,
}

impl From<CartLine> for CartItemDto {
    fn from(l: CartLine) -> Self {
        Self { id: l.id, book_id: l.book_id, book_title: l.book_title, price: l.price, quantity: l.quantity }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartDto {
    pub user_id: i64,
    pub items: Vec<CartItemDto>,
    pub total: BigDecimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCartItemRequest {
    pub book_id: i64,
    pub quantity: i32,
}

impl Validate for AddCartItemRequest {
    fn validate(&self) -> Result<(), ServiceError> { validate_quantity(self.quantity) }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCartItemRequest {
    pub quantity: i32,
}

impl Validate for UpdateCartItemRequest {
    fn validate(&self) -> Result<(), ServiceError> { validate_quantity(self.quantity) }
}

/// Quantities run from 1 to [`MAX_QUANTITY`].
fn validate_quantity(quantity: i32) -> Result<(), ServiceError> {
    require_positive("quantity", quantity)?;
    require_at_most("quantity", quantity, MAX_QUANTITY)
}
