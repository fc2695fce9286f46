use async_trait::async_trait;
use models::peca_feira;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::{domain::PecaFeiraInput, ENTITY};
use crate::errors::ServiceError;

#[async_trait]
pub trait PecaFeiraRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<peca_feira::Model>, ServiceError>;
    /// Only rows with `deletado = false`.
    async fn find_all_by_deletado_false(&self) -> Result<Vec<peca_feira::Model>, ServiceError>;
    async fn insert(&self, input: &PecaFeiraInput) -> Result<peca_feira::Model, ServiceError>;
    async fn update(&self, row: &peca_feira::Model) -> Result<peca_feira::Model, ServiceError>;
    /// Soft delete; `EmptyResult` when the row is absent or already hidden.
    async fn mark_deleted(&self, id: i32) -> Result<(), ServiceError>;
    /// Hard delete; `EmptyResult` when nothing was removed.
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmPecaFeiraRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl PecaFeiraRepository for SeaOrmPecaFeiraRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<peca_feira::Model>, ServiceError> {
        Ok(peca_feira::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_all_by_deletado_false(&self) -> Result<Vec<peca_feira::Model>, ServiceError> {
        Ok(peca_feira::find_active(&self.db).await?)
    }

    async fn insert(&self, input: &PecaFeiraInput) -> Result<peca_feira::Model, ServiceError> {
        Ok(peca_feira::create(&self.db, input.modelo_id, input.quantidade).await?)
    }

    async fn update(&self, row: &peca_feira::Model) -> Result<peca_feira::Model, ServiceError> {
        peca_feira::replace(&self.db, row.id, row.modelo_id, row.quantidade)
            .await
            .map_err(ServiceError::for_row(ENTITY, row.id))
    }

    async fn mark_deleted(&self, id: i32) -> Result<(), ServiceError> {
        peca_feira::mark_deleted(&self.db, id)
            .await
            .map_err(ServiceError::for_row(ENTITY, id))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let res = peca_feira::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::empty_result(ENTITY, id));
        }
        Ok(())
    }
}
