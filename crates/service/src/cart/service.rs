use std::sync::Arc;

use bigdecimal::BigDecimal;
use tracing::{debug, info, instrument};

use super::dto::{AddCartItemRequest, CartDto, CartItemDto, UpdateCartItemRequest};
use super::repository::CartRepository;
use crate::errors::ServiceError;
use crate::validation::Validate;

pub struct CartService<R: CartRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CartRepository + ?Sized> Clone for CartService<R> {
    fn clone(&self) -> Self { Self { repo: self.repo.clone() } }
}

impl<R: CartRepository + ?Sized> CartService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn view(&self, user_id: i64) -> Result<CartDto, ServiceError> {
        let lines = self.repo.list(user_id).await?;
        let total = lines.iter().fold(BigDecimal::from(0), |acc, l| acc + l.subtotal());
        Ok(CartDto { user_id, items: lines.into_iter().map(CartItemDto::from).collect(), total })
    }

    #[instrument(skip(self, request), fields(book_id = request.book_id, quantity = request.quantity))]
    pub async fn add_item(&self, user_id: i64, request: AddCartItemRequest) -> Result<CartItemDto, ServiceError> {
        request.validate()?;
        let line = self
            .repo
            .add(user_id, request.book_id, request.quantity)
            .await?
            .ok_or_else(|| ServiceError::not_found("book", request.book_id))?;
        info!(user_id, item_id = line.id, quantity = line.quantity, "cart_item_added");
        Ok(line.into())
    }

    #[instrument(skip(self, request))]
    pub async fn update_item(
        &self,
        user_id: i64,
        item_id: i64,
        request: UpdateCartItemRequest,
    ) -> Result<CartItemDto, ServiceError> {
        request.validate()?;
        let line = self
            .repo
            .set_quantity(user_id, item_id, request.quantity)
            .await?
            .ok_or_else(|| ServiceError::not_found("cart item", item_id))?;
        Ok(line.into())
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, user_id: i64, item_id: i64) -> Result<(), ServiceError> {
        if self.repo.remove(user_id, item_id).await? == 0 {
            debug!(user_id, item_id, "remove of absent cart item ignored");
        }
        Ok(())
    }
}
