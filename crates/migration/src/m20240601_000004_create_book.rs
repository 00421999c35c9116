//! Create `book` table.
//!
//! ISBN carries a unique constraint; duplicates surface as conflicts in the service layer.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Book::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(string_len(Book::Title, 255).not_null())
                    .col(string_len(Book::Author, 255).not_null())
                    .col(string_len(Book::Isbn, 64).unique_key().not_null())
                    .col(ColumnDef::new(Book::Price).decimal_len(10, 2).not_null())
                    .col(ColumnDef::new(Book::Description).text().null())
                    .col(ColumnDef::new(Book::CoverImage).string_len(512).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Book::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Book { Table, Id, Title, Author, Isbn, Price, Description, CoverImage }
