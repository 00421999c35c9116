//! Book catalog: storage gateway, mapper and the CRUD service.

pub mod domain;
pub mod dto;
pub mod mapper;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::BookService;
