//! Orders placed from a user's cart, and their line items.

pub mod domain;
pub mod dto;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::OrderService;
