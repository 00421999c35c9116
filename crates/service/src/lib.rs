//! Service layer providing the bookstore's business operations on top of models.
//! - Storage gateways are traits with a SeaORM and an in-memory implementation.
//! - Mappers turn persisted records into transfer objects.
//! - Services are independent of the web framework; errors are typed.

pub mod errors;
pub mod pagination;
pub mod validation;
pub mod auth;
pub mod book;
pub mod cart;
pub mod order;
#[cfg(test)]
pub mod test_support;
