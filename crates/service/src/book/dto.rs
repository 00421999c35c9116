use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::validation::{require_non_blank, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: BigDecimal,
    pub description: Option<String>,
    pub cover_image: Option<String>,
}

/// Payload for both create and full-replace update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: BigDecimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
}

impl Validate for CreateBookRequest {
    fn validate(&self) -> Result<(), ServiceError> {
        require_non_blank("title", &self.title)?;
        require_non_blank("author", &self.author)?;
        require_non_blank("isbn", &self.isbn)?;
        if self.price < BigDecimal::from(0) {
            return Err(ServiceError::validation("price must not be negative"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn request() -> CreateBookRequest {
        CreateBookRequest {
            title: "Dune".into(),
            author: "Herbert".into(),
            isbn: "123".into(),
            price: BigDecimal::from_str("9.99").unwrap(),
            description: None,
            cover_image: None,
        }
    }

    #[test]
    fn accepts_complete_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn rejects_blank_title() {
        let r = CreateBookRequest { title: "  ".into(), ..request() };
        let err = r.validate().unwrap_err();
        assert_eq!(err.to_string(), "validation error: title must not be blank");
    }

    #[test]
    fn rejects_negative_price_but_allows_free_books() {
        let r = CreateBookRequest { price: BigDecimal::from_str("-0.01").unwrap(), ..request() };
        assert!(matches!(r.validate(), Err(ServiceError::Validation(_))));
        let free = CreateBookRequest { price: BigDecimal::from(0), ..request() };
        assert!(free.validate().is_ok());
    }

    #[test]
    fn optional_fields_may_be_omitted_in_json() {
        let r: CreateBookRequest = serde_json::from_value(serde_json::json!({
            "title": "Dune", "author": "Herbert", "isbn": "123", "price": "9.99"
        }))
        .unwrap();
        assert_eq!(r, request());
    }
}
