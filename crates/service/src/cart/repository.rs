use async_trait::async_trait;

use super::domain::CartLine;
use crate::errors::ServiceError;

/// Storage gateway for cart rows. Every operation is scoped to one user.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn list(&self, user_id: i64) -> Result<Vec<CartLine>, ServiceError>;
    /// Adds `quantity` of a book, merging with an existing row for the same book.
    /// `None` when the book does not exist.
    async fn add(&self, user_id: i64, book_id: i64, quantity: i32) -> Result<Option<CartLine>, ServiceError>;
    /// `None` when the item is not in this user's cart.
    async fn set_quantity(&self, user_id: i64, item_id: i64, quantity: i32) -> Result<Option<CartLine>, ServiceError>;
    async fn remove(&self, user_id: i64, item_id: i64) -> Result<u64, ServiceError>;
    async fn clear(&self, user_id: i64) -> Result<u64, ServiceError>;
}

/// In-memory cart that resolves books through a book gateway
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    use crate::book::repository::BookRepository;

    pub struct InMemoryCartRepository {
        books: Arc<dyn BookRepository>,
        rows: Mutex<BTreeMap<i64, models::cart_item::Model>>,
        next_id: AtomicI64,
    }

    impl InMemoryCartRepository {
        pub fn new(books: Arc<dyn BookRepository>) -> Self {
            Self { books, rows: Mutex::new(BTreeMap::new()), next_id: AtomicI64::new(0) }
        }

        async fn line(&self, item: models::cart_item::Model) -> Result<Option<CartLine>, ServiceError> {
            Ok(self.books.find_by_id(item.book_id).await?.map(|b| CartLine::from_parts(item, b)))
        }
    }

    #[async_trait]
    impl CartRepository for InMemoryCartRepository {
        async fn list(&self, user_id: i64) -> Result<Vec<CartLine>, ServiceError> {
            let items: Vec<_> = self.rows.lock().await.values().filter(|r| r.user_id == user_id).cloned().collect();
            let mut lines = Vec::with_capacity(items.len());
            for item in items {
                // rows of deleted books disappear, like the cascading FK
                if let Some(line) = self.line(item).await? {
                    lines.push(line);
                }
            }
            Ok(lines)
        }

        async fn add(&self, user_id: i64, book_id: i64, quantity: i32) -> Result<Option<CartLine>, ServiceError> {
            let Some(book) = self.books.find_by_id(book_id).await? else { return Ok(None) };
            let mut rows = self.rows.lock().await;
            let existing = rows.values_mut().find(|r| r.user_id == user_id && r.book_id == book_id);
            let item = match existing {
                Some(row) => {
                    row.quantity = CartLine::merged_quantity(row.quantity, quantity)?;
                    row.clone()
                }
                None => {
                    let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
                    let row = models::cart_item::Model { id, user_id, book_id, quantity };
                    rows.insert(id, row.clone());
                    row
                }
            };
            Ok(Some(CartLine::from_parts(item, book)))
        }

        async fn set_quantity(&self, user_id: i64, item_id: i64, quantity: i32) -> Result<Option<CartLine>, ServiceError> {
            let item = {
                let mut rows = self.rows.lock().await;
                match rows.get_mut(&item_id) {
                    Some(row) if row.user_id == user_id => {
                        row.quantity = quantity;
                        row.clone()
                    }
                    _ => return Ok(None),
                }
            };
            self.line(item).await
        }

        async fn remove(&self, user_id: i64, item_id: i64) -> Result<u64, ServiceError> {
            let mut rows = self.rows.lock().await;
            if rows.get(&item_id).is_some_and(|r| r.user_id == user_id) {
                rows.remove(&item_id);
                return Ok(1);
            }
            Ok(0)
        }

        async fn clear(&self, user_id: i64) -> Result<u64, ServiceError> {
            let mut rows = self.rows.lock().await;
            let before = rows.len();
            rows.retain(|_, r| r.user_id != user_id);
            Ok((before - rows.len()) as u64)
        }
    }
}
