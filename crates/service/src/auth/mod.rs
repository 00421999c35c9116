//! Accounts, password login and JWT issuing.
//!
//! Same layering as the catalog: domain types, a repository trait with
//! SeaORM and in-memory implementations, and a framework-free service.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;
pub mod token;

pub use service::AuthService;
