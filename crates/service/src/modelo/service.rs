use std::sync::Arc;

use models::modelo;
use tracing::{info, instrument};

use super::{domain::ModeloInput, repository::ModeloRepository, ENTITY};
use crate::errors::ServiceError;

/// Models are only created, listed and removed; fair stock points at them.
pub struct ModeloService<R: ModeloRepository> {
    repo: Arc<R>,
}

impl<R: ModeloRepository> ModeloService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn find(&self, id: i32) -> Result<modelo::Model, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    pub async fn find_all(&self) -> Result<Vec<modelo::Model>, ServiceError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self, input), fields(peca_id = input.peca_id))]
    pub async fn insert(&self, input: ModeloInput) -> Result<modelo::Model, ServiceError> {
        modelo::validate_nome(&input.nome)?;
        let created = self.repo.insert(&input).await?;
        info!(id = created.id, "modelo created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        info!(id, "modelo deleted");
        Ok(())
    }
}
