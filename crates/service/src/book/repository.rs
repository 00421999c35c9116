use async_trait::async_trait;

use super::domain::Book;
use crate::errors::ServiceError;

/// Storage gateway for book records.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert when `book.id` is `None`, otherwise overwrite the stored row.
    async fn save(&self, book: Book) -> Result<models::book::Model, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<models::book::Model>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<models::book::Model>, ServiceError>;
    /// Returns the number of rows removed (0 or 1).
    async fn delete_by_id(&self, id: i64) -> Result<u64, ServiceError>;
}

/// In-memory repository for tests and local runs without a database
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use tokio::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryBookRepository {
        rows: Mutex<BTreeMap<i64, models::book::Model>>,
        next_id: AtomicI64,
    }

    #[async_trait]
    impl BookRepository for InMemoryBookRepository {
        async fn save(&self, book: Book) -> Result<models::book::Model, ServiceError> {
            let mut rows = self.rows.lock().await;
            if rows.values().any(|r| r.isbn == book.isbn && Some(r.id) != book.id) {
                return Err(ServiceError::Conflict(format!("isbn {} already exists", book.isbn)));
            }
            let id = match book.id {
                Some(id) if rows.contains_key(&id) => id,
                Some(id) => return Err(ServiceError::Db(format!("book {id} not updated: row missing"))),
                None => self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            };
            let model = models::book::Model {
                id,
                title: book.title,
                author: book.author,
                isbn: book.isbn,
                price: book.price,
                description: book.description,
                cover_image: book.cover_image,
            };
            rows.insert(id, model.clone());
            Ok(model)
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<models::book::Model>, ServiceError> {
            Ok(self.rows.lock().await.get(&id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<models::book::Model>, ServiceError> {
            Ok(self.rows.lock().await.values().cloned().collect())
        }

        async fn delete_by_id(&self, id: i64) -> Result<u64, ServiceError> {
            Ok(self.rows.lock().await.remove(&id).map_or(0, |_| 1))
        }
    }
}
