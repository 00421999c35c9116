//! Create `role` table and seed the two authorities.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Role::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(string_len(Role::Name, 32).unique_key().not_null())
                    .to_owned(),
            )
            .await?;

        let seed = Query::insert()
            .into_table(Role::Table)
            .columns([Role::Name])
            .values_panic(["ROLE_USER".into()])
            .values_panic(["ROLE_ADMIN".into()])
            .on_conflict(OnConflict::column(Role::Name).do_nothing().to_owned())
            .to_owned();
        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Role::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Role { Table, Id, Name }
