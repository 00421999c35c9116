//! SeaORM entities for the bookstore schema plus the closed enumerations
//! (`RoleName`, `OrderStatus`) persisted as strings.

pub mod errors;
pub mod db;
pub mod role;
pub mod user;
pub mod user_role;
pub mod book;
pub mod cart_item;
pub mod order;
pub mod order_item;

pub use role::RoleName;
pub use order::OrderStatus;

#[cfg(test)]
mod tests;
