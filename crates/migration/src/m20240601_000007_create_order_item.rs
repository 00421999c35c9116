//! Create `order_item` table. `price` is the unit price captured when the order was placed.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderItem::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(OrderItem::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(OrderItem::OrderId).big_integer().not_null())
                    .col(ColumnDef::new(OrderItem::BookId).big_integer().not_null())
                    .col(integer(OrderItem::Quantity).not_null())
                    .col(ColumnDef::new(OrderItem::Price).decimal_len(10, 2).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_order")
                            .from(OrderItem::Table, OrderItem::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_book")
                            .from(OrderItem::Table, OrderItem::BookId)
                            .to(Book::Table, Book::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(OrderItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum OrderItem { Table, Id, OrderId, BookId, Quantity, Price }

#[derive(DeriveIden)]
enum Orders { Table, Id }

#[derive(DeriveIden)]
enum Book { Table, Id }
