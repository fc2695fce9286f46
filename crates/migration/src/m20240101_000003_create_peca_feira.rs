//! Create `peca_feira` table.
//! Stock per model at the fair; `deletado` marks rows hidden by soft delete.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PecaFeira::Table)
                    .if_not_exists()
                    .col(pk_auto(PecaFeira::Id))
                    .col(integer(PecaFeira::ModeloId).not_null())
                    .col(integer(PecaFeira::Quantidade).not_null())
                    .col(boolean(PecaFeira::Deletado).not_null().default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_peca_feira_modelo")
                            .from(PecaFeira::Table, PecaFeira::ModeloId)
                            .to(Modelo::Table, Modelo::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PecaFeira::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PecaFeira { Table, Id, ModeloId, Quantidade, Deletado }

#[derive(DeriveIden)]
enum Modelo { Table, Id }
