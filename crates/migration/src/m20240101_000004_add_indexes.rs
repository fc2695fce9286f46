use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Modelo: index on peca_id (FK lookups on part delete)
        manager
            .create_index(
                Index::create()
                    .name("idx_modelo_peca")
                    .table(Modelo::Table)
                    .col(Modelo::PecaId)
                    .to_owned(),
            )
            .await?;

        // PecaFeira: index on modelo_id
        manager
            .create_index(
                Index::create()
                    .name("idx_peca_feira_modelo")
                    .table(PecaFeira::Table)
                    .col(PecaFeira::ModeloId)
                    .to_owned(),
            )
            .await?;

        // PecaFeira: the active listing filters on deletado
        manager
            .create_index(
                Index::create()
                    .name("idx_peca_feira_deletado")
                    .table(PecaFeira::Table)
                    .col(PecaFeira::Deletado)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_peca_feira_deletado").table(PecaFeira::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_peca_feira_modelo").table(PecaFeira::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_modelo_peca").table(Modelo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Modelo { Table, PecaId }

#[derive(DeriveIden)]
enum PecaFeira { Table, ModeloId, Deletado }
