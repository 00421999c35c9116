//! Conversions between book transfer objects and stored records.

use super::domain::Book;
use super::dto::{BookDto, CreateBookRequest};

/// New, unsaved record from a create request.
pub fn to_model(request: &CreateBookRequest) -> Book {
    Book {
        id: None,
        title: request.title.clone(),
        author: request.author.clone(),
        isbn: request.isbn.clone(),
        price: request.price.clone(),
        description: request.description.clone(),
        cover_image: request.cover_image.clone(),
    }
}

pub fn to_dto(model: models::book::Model) -> BookDto {
    BookDto {
        id: model.id,
        title: model.title,
        author: model.author,
        isbn: model.isbn,
        price: model.price,
        description: model.description,
        cover_image: model.cover_image,
    }
}

/// Overwrite every mutable field of `book` from `request`; the identifier is kept.
pub fn apply_update(book: &mut Book, request: CreateBookRequest) {
    book.title = request.title;
    book.author = request.author;
    book.isbn = request.isbn;
    book.price = request.price;
    book.description = request.description;
    book.cover_image = request.cover_image;
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;

    use super::*;

    #[test]
    fn to_model_leaves_id_unassigned() {
        let req = CreateBookRequest {
            title: "Dune".into(),
            author: "Herbert".into(),
            isbn: "123".into(),
            price: BigDecimal::from_str("9.99").unwrap(),
            description: Some("spice".into()),
            cover_image: None,
        };
        let book = to_model(&req);
        assert_eq!(book.id, None);
        assert_eq!(book.description.as_deref(), Some("spice"));
    }

    #[test]
    fn apply_update_clears_optional_fields_absent_from_request() {
        let mut book = Book {
            id: Some(7),
            title: "Old".into(),
            author: "A".into(),
            isbn: "1".into(),
            price: BigDecimal::from(5),
            description: Some("old description".into()),
            cover_image: Some("old.png".into()),
        };
        let req = CreateBookRequest {
            title: "New".into(),
            author: "B".into(),
            isbn: "2".into(),
            price: BigDecimal::from(6),
            description: None,
            cover_image: None,
        };
        apply_update(&mut book, req);
        assert_eq!(book.id, Some(7));
        assert_eq!(book.title, "New");
        assert!(book.description.is_none());
        assert!(book.cover_image.is_none());
    }
}
