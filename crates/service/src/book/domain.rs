use bigdecimal::BigDecimal;

/// Book record handed to the storage gateway. `id` is absent until first saved.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: BigDecimal,
    pub description: Option<String>,
    pub cover_image: Option<String>,
}

impl From<models::book::Model> for Book {
    fn from(m: models::book::Model) -> Self {
        Self {
            id: Some(m.id),
            title: m.title,
            author: m.author,
            isbn: m.isbn,
            price: m.price,
            description: m.description,
            cover_image: m.cover_image,
        }
    }
}
