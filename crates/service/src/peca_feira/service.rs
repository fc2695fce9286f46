use std::sync::Arc;

use models::peca_feira;
use tracing::{info, instrument};

use super::{domain::PecaFeiraInput, repository::PecaFeiraRepository, ENTITY};
use crate::errors::ServiceError;

/// Application service for fair stock.
///
/// Rows flagged `deletado` are invisible here: `find`, `find_all`, `update` and
/// `delete` all treat them as absent. `purge` is the only path that removes rows
/// from storage and it ignores the flag.
pub struct PecaFeiraService<R: PecaFeiraRepository> {
    repo: Arc<R>,
}

impl<R: PecaFeiraRepository> PecaFeiraService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn find(&self, id: i32) -> Result<peca_feira::Model, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .filter(|row| !row.deletado)
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    pub async fn find_all(&self) -> Result<Vec<peca_feira::Model>, ServiceError> {
        self.repo.find_all_by_deletado_false().await
    }

    #[instrument(skip(self, input), fields(modelo_id = input.modelo_id))]
    pub async fn insert(&self, input: PecaFeiraInput) -> Result<peca_feira::Model, ServiceError> {
        peca_feira::validate_quantidade(input.quantidade)?;
        let created = self.repo.insert(&input).await?;
        info!(id = created.id, quantidade = created.quantidade, "peca_feira created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: PecaFeiraInput) -> Result<peca_feira::Model, ServiceError> {
        peca_feira::validate_quantidade(input.quantidade)?;
        self.find(id).await?;
        let merged = peca_feira::Model {
            id,
            modelo_id: input.modelo_id,
            quantidade: input.quantidade,
            deletado: false,
        };
        self.repo.update(&merged).await
    }

    /// Soft delete: the row stays in storage with `deletado = true`.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.find(id).await?;
        self.repo.mark_deleted(id).await?;
        info!(id, "peca_feira hidden");
        Ok(())
    }

    /// Hard delete, hidden rows included.
    #[instrument(skip(self))]
    pub async fn purge(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        info!(id, "peca_feira purged");
        Ok(())
    }
}
