use bigdecimal::BigDecimal;

use crate::errors::ServiceError;

/// Upper bound on the quantity of one cart line, merged or not.
pub const MAX_QUANTITY: i32 = 1000;

/// A cart row joined with the current catalog data of its book.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: i64,
    pub user_id: i64,
    pub book_id: i64,
    pub book_title: String,
    pub price: BigDecimal,
    pub quantity: i32,
}

impl CartLine {
    pub fn subtotal(&self) -> BigDecimal {
        &self.price * BigDecimal::from(self.quantity)
    }

    /// Quantity after adding `extra` to an existing line.
    pub(crate) fn merged_quantity(current: i32, extra: i32) -> Result<i32, ServiceError> {
        current
            .checked_add(extra)
            .filter(|q| *q <= MAX_QUANTITY)
            .ok_or_else(|| ServiceError::validation(format!("quantity must be at most {MAX_QUANTITY}")))
    }

    pub(crate) fn from_parts(item: models::cart_item::Model, book: models::book::Model) -> Self {
        Self {
            id: item.id,
            user_id: item.user_id,
            book_id: item.book_id,
            book_title: book.title,
            price: book.price,
            quantity: item.quantity,
        }
    }
}
