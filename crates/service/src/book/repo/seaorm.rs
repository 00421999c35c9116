use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set};

use models::book;

use crate::book::domain::Book;
use crate::book::repository::BookRepository;
use crate::errors::ServiceError;

pub struct SeaOrmBookRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn save(&self, b: Book) -> Result<book::Model, ServiceError> {
        let is_update = b.id.is_some();
        let am = book::ActiveModel {
            id: b.id.map_or(NotSet, Set),
            title: Set(b.title),
            author: Set(b.author),
            isbn: Set(b.isbn),
            price: Set(b.price),
            description: Set(b.description),
            cover_image: Set(b.cover_image),
        };
        let saved = if is_update { am.update(&self.db).await? } else { am.insert(&self.db).await? };
        Ok(saved)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<book::Model>, ServiceError> {
        Ok(book::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_all(&self) -> Result<Vec<book::Model>, ServiceError> {
        Ok(book::Entity::find().order_by_asc(book::Column::Id).all(&self.db).await?)
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, ServiceError> {
        let res = book::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected)
    }
}
