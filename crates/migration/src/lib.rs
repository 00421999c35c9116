//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_role;
mod m20240601_000002_create_user;
mod m20240601_000003_create_user_role;
mod m20240601_000004_create_book;
mod m20240601_000005_create_cart_item;
mod m20240601_000006_create_order;
mod m20240601_000007_create_order_item;
mod m20240601_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_role::Migration),
            Box::new(m20240601_000002_create_user::Migration),
            Box::new(m20240601_000003_create_user_role::Migration),
            Box::new(m20240601_000004_create_book::Migration),
            Box::new(m20240601_000005_create_cart_item::Migration),
            Box::new(m20240601_000006_create_order::Migration),
            Box::new(m20240601_000007_create_order_item::Migration),
            // Indexes should always be applied last
            Box::new(m20240601_000010_add_indexes::Migration),
        ]
    }
}
