use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // CartItem: one row per (user, book)
        manager
            .create_index(
                Index::create()
                    .name("uniq_cart_item_user_book")
                    .table(CartItem::Table)
                    .col(CartItem::UserId)
                    .col(CartItem::BookId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Orders: index on user_id
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_user")
                    .table(Orders::Table)
                    .col(Orders::UserId)
                    .to_owned(),
            )
            .await?;

        // OrderItem: index on order_id
        manager
            .create_index(
                Index::create()
                    .name("idx_order_item_order")
                    .table(OrderItem::Table)
                    .col(OrderItem::OrderId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_cart_item_user_book").table(CartItem::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_orders_user").table(Orders::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_order_item_order").table(OrderItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CartItem { Table, UserId, BookId }

#[derive(DeriveIden)]
enum Orders { Table, UserId }

#[derive(DeriveIden)]
enum OrderItem { Table, OrderId }
