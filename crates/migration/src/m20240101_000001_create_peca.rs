//! Create `peca` table.
//!
//! Catalog of parts; `modelo` rows reference it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Peca::Table)
                    .if_not_exists()
                    .col(pk_auto(Peca::Id))
                    .col(string_len(Peca::Nome, 128).not_null())
                    .col(integer(Peca::Tamanho).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Peca::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Peca { Table, Id, Nome, Tamanho }
