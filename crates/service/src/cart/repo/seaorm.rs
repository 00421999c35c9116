use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};

use models::{book, cart_item};

use crate::cart::domain::CartLine;
use crate::cart::repository::CartRepository;
use crate::errors::ServiceError;

pub struct SeaOrmCartRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCartRepository {
    async fn owned_item(&self, user_id: i64, item_id: i64) -> Result<Option<cart_item::Model>, ServiceError> {
        Ok(cart_item::Entity::find_by_id(item_id)
            .filter(cart_item::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?)
    }
}

#[async_trait::async_trait]
impl CartRepository for SeaOrmCartRepository {
    async fn list(&self, user_id: i64) -> Result<Vec<CartLine>, ServiceError> {
        let rows = cart_item::Entity::find()
            .filter(cart_item::Column::UserId.eq(user_id))
            .order_by_asc(cart_item::Column::Id)
            .find_also_related(book::Entity)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().filter_map(|(item, b)| b.map(|b| CartLine::from_parts(item, b))).collect())
    }

    async fn add(&self, user_id: i64, book_id: i64, quantity: i32) -> Result<Option<CartLine>, ServiceError> {
        let Some(b) = book::Entity::find_by_id(book_id).one(&self.db).await? else { return Ok(None) };
        let existing = cart_item::Entity::find()
            .filter(cart_item::Column::UserId.eq(user_id))
            .filter(cart_item::Column::BookId.eq(book_id))
            .one(&self.db)
            .await?;
        let item = match existing {
            Some(row) => {
                let merged = CartLine::merged_quantity(row.quantity, quantity)?;
                let mut am = row.into_active_model();
                am.quantity = Set(merged);
                am.update(&self.db).await?
            }
            None => {
                cart_item::ActiveModel {
                    user_id: Set(user_id),
                    book_id: Set(book_id),
                    quantity: Set(quantity),
                    ..Default::default()
                }
                .insert(&self.db)
                .await?
            }
        };
        Ok(Some(CartLine::from_parts(item, b)))
    }

    async fn set_quantity(&self, user_id: i64, item_id: i64, quantity: i32) -> Result<Option<CartLine>, ServiceError> {
        let Some(row) = self.owned_item(user_id, item_id).await? else { return Ok(None) };
        let mut am = row.into_active_model();
        am.quantity = Set(quantity);
        let item = am.update(&self.db).await?;
        let b = book::Entity::find_by_id(item.book_id).one(&self.db).await?;
        Ok(b.map(|b| CartLine::from_parts(item, b)))
    }

    async fn remove(&self, user_id: i64, item_id: i64) -> Result<u64, ServiceError> {
        let res = cart_item::Entity::delete_many()
            .filter(cart_item::Column::Id.eq(item_id))
            .filter(cart_item::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }

    async fn clear(&self, user_id: i64) -> Result<u64, ServiceError> {
        let res = cart_item::Entity::delete_many()
            .filter(cart_item::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }
}
