//! Create `cart_item` table: one row per (user, book).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CartItem::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CartItem::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(CartItem::UserId).big_integer().not_null())
                    .col(ColumnDef::new(CartItem::BookId).big_integer().not_null())
                    .col(integer(CartItem::Quantity).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_item_user")
                            .from(CartItem::Table, CartItem::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_item_book")
                            .from(CartItem::Table, CartItem::BookId)
                            .to(Book::Table, Book::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CartItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CartItem { Table, Id, UserId, BookId, Quantity }

#[derive(DeriveIden)]
enum User { Table, Id }

#[derive(DeriveIden)]
enum Book { Table, Id }
