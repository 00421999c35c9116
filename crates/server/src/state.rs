use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::auth::repo::seaorm::SeaOrmAuthRepository;
use service::auth::repository::{memory::InMemoryAuthRepository, AuthRepository};
use service::auth::service::{AuthConfig, AuthService};
use service::book::repo::seaorm::SeaOrmBookRepository;
use service::book::repository::{memory::InMemoryBookRepository, BookRepository};
use service::book::BookService;
use service::cart::repo::seaorm::SeaOrmCartRepository;
use service::cart::repository::{memory::InMemoryCartRepository, CartRepository};
use service::cart::CartService;
use service::order::repo::seaorm::SeaOrmOrderRepository;
use service::order::repository::{memory::InMemoryOrderRepository, OrderRepository};
use service::order::OrderService;

/// Shared handler state. Services sit behind trait objects so the router
/// runs unchanged over PostgreSQL or the in-memory gateways.
#[derive(Clone)]
pub struct ServerState {
    pub auth: Arc<AuthService<dyn AuthRepository>>,
    pub books: BookService<dyn BookRepository>,
    pub cart: CartService<dyn CartRepository>,
    pub orders: OrderService<dyn OrderRepository, dyn CartRepository>,
}

fn auth_config(cfg: &configs::AuthConfig) -> AuthConfig {
    AuthConfig { jwt_secret: cfg.jwt_secret.clone(), token_ttl_hours: cfg.token_ttl_hours }
}

impl ServerState {
    fn assemble(
        cfg: &configs::AuthConfig,
        auth: Arc<dyn AuthRepository>,
        books: Arc<dyn BookRepository>,
        cart: Arc<dyn CartRepository>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            auth: Arc::new(AuthService::new(auth, auth_config(cfg))),
            books: BookService::new(books),
            cart: CartService::new(cart.clone()),
            orders: OrderService::new(orders, cart),
        }
    }

    pub fn from_db(db: DatabaseConnection, cfg: &configs::AuthConfig) -> Self {
        Self::assemble(
            cfg,
            Arc::new(SeaOrmAuthRepository { db: db.clone() }),
            Arc::new(SeaOrmBookRepository { db: db.clone() }),
            Arc::new(SeaOrmCartRepository { db: db.clone() }),
            Arc::new(SeaOrmOrderRepository { db }),
        )
    }

    /// Fully in-memory state, used by the router tests.
    pub fn in_memory(cfg: &configs::AuthConfig) -> Self {
        let books: Arc<dyn BookRepository> = Arc::new(InMemoryBookRepository::default());
        Self::assemble(
            cfg,
            Arc::new(InMemoryAuthRepository::default()),
            books.clone(),
            Arc::new(InMemoryCartRepository::new(books)),
            Arc::new(InMemoryOrderRepository::default()),
        )
    }
}
