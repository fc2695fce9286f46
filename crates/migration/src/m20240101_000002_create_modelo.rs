//! Create `modelo` table with FK to `peca`.
//!
//! Deleting a part that still has models is rejected by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Modelo::Table)
                    .if_not_exists()
                    .col(pk_auto(Modelo::Id))
                    .col(string_len(Modelo::Nome, 128).not_null())
                    .col(integer(Modelo::PecaId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_modelo_peca")
                            .from(Modelo::Table, Modelo::PecaId)
                            .to(Peca::Table, Peca::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Modelo::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Modelo { Table, Id, Nome, PecaId }

#[derive(DeriveIden)]
enum Peca { Table, Id }
