use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::Book;
use super::dto::{BookDto, CreateBookRequest};
use super::mapper;
use super::repository::BookRepository;
use crate::errors::ServiceError;

/// Catalog operations over any book storage gateway.
pub struct BookService<R: BookRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: BookRepository + ?Sized> Clone for BookService<R> {
    fn clone(&self) -> Self { Self { repo: self.repo.clone() } }
}

impl<R: BookRepository + ?Sized> BookService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Persist a new book and return it with its assigned id.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::book::{BookService, dto::CreateBookRequest, repository::memory::InMemoryBookRepository};
    /// let svc = BookService::new(Arc::new(InMemoryBookRepository::default()));
    /// let req = CreateBookRequest {
    ///     title: "Dune".into(), author: "Herbert".into(), isbn: "123".into(),
    ///     price: "9.99".parse().unwrap(), description: None, cover_image: None,
    /// };
    /// let dto = tokio_test::block_on(svc.save(req)).unwrap();
    /// assert_eq!(dto.title, "Dune");
    /// ```
    #[instrument(skip(self, request), fields(isbn = %request.isbn))]
    pub async fn save(&self, request: CreateBookRequest) -> Result<BookDto, ServiceError> {
        let saved = self.repo.save(mapper::to_model(&request)).await?;
        info!(book_id = saved.id, "book_created");
        Ok(mapper::to_dto(saved))
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<BookDto>, ServiceError> {
        let rows = self.repo.find_all().await?;
        Ok(rows.into_iter().map(mapper::to_dto).collect())
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<BookDto, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .map(mapper::to_dto)
            .ok_or_else(|| ServiceError::not_found("book", id))
    }

    /// Remove a book; an unknown id is not an error.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        let removed = self.repo.delete_by_id(id).await?;
        if removed == 0 {
            debug!(book_id = id, "delete of absent book ignored");
        } else {
            info!(book_id = id, "book_deleted");
        }
        Ok(())
    }

    /// Full replace of every mutable field; the id never changes.
    #[instrument(skip(self, request))]
    pub async fn update_by_id(&self, id: i64, request: CreateBookRequest) -> Result<BookDto, ServiceError> {
        let current = self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("book", id))?;
        let mut book = Book::from(current);
        mapper::apply_update(&mut book, request);
        let saved = self.repo.save(book).await?;
        info!(book_id = saved.id, "book_updated");
        Ok(mapper::to_dto(saved))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;

    use super::*;
    use crate::book::repository::memory::InMemoryBookRepository;

    fn svc() -> BookService<InMemoryBookRepository> {
        BookService::new(Arc::new(InMemoryBookRepository::default()))
    }

    fn dune() -> CreateBookRequest {
        CreateBookRequest {
            title: "Dune".into(),
            author: "Herbert".into(),
            isbn: "123".into(),
            price: BigDecimal::from_str("9.99").unwrap(),
            description: None,
            cover_image: None,
        }
    }

    #[tokio::test]
    async fn save_assigns_id_and_is_retrievable() {
        let svc = svc();
        let saved = svc.save(dune()).await.unwrap();
        assert_eq!(saved.id, 1);
        let found = svc.find_by_id(saved.id).await.unwrap();
        assert_eq!(found, saved);
        assert_eq!(found.price, BigDecimal::from_str("9.99").unwrap());
    }

    #[tokio::test]
    async fn find_all_returns_every_book() {
        let svc = svc();
        assert!(svc.find_all().await.unwrap().is_empty());
        svc.save(dune()).await.unwrap();
        svc.save(CreateBookRequest { title: "Emma".into(), isbn: "456".into(), ..dune() }).await.unwrap();
        let titles: Vec<_> = svc.find_all().await.unwrap().into_iter().map(|b| b.title).collect();
        assert_eq!(titles, vec!["Dune", "Emma"]);
    }

    #[tokio::test]
    async fn missing_book_is_not_found_with_message() {
        let err = svc().find_by_id(999999).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.to_string(), "can't find book by id 999999");
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let svc = svc();
        let saved = svc.save(dune()).await.unwrap();
        svc.delete_by_id(saved.id).await.unwrap();
        svc.delete_by_id(saved.id).await.unwrap();
        svc.delete_by_id(424242).await.unwrap();
        assert!(matches!(svc.find_by_id(saved.id).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id() {
        let svc = svc();
        let saved = svc.save(CreateBookRequest { description: Some("spice".into()), ..dune() }).await.unwrap();
        let req = CreateBookRequest {
            title: "Dune Messiah".into(),
            price: BigDecimal::from_str("12.50").unwrap(),
            ..dune()
        };
        let updated = svc.update_by_id(saved.id, req).await.unwrap();
        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.title, "Dune Messiah");
        assert!(updated.description.is_none());
        assert_eq!(svc.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_of_missing_book_fails() {
        let err = svc().update_by_id(7, dune()).await.unwrap_err();
        assert_eq!(err.to_string(), "can't find book by id 7");
    }

    #[tokio::test]
    async fn duplicate_isbn_conflicts() {
        let svc = svc();
        svc.save(dune()).await.unwrap();
        let err = svc.save(CreateBookRequest { title: "Other".into(), ..dune() }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }
}
