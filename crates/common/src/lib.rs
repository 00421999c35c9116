//! Types and helpers shared by the bookstore crates.

pub mod types;
pub mod utils;
