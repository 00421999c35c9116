//! Per-user shopping cart that feeds order creation.

pub mod domain;
pub mod dto;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::CartService;
