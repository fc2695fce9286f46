use async_trait::async_trait;
use models::modelo;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::{domain::ModeloInput, ENTITY};
use crate::errors::ServiceError;

#[async_trait]
pub trait ModeloRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<modelo::Model>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<modelo::Model>, ServiceError>;
    async fn insert(&self, input: &ModeloInput) -> Result<modelo::Model, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmModeloRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ModeloRepository for SeaOrmModeloRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<modelo::Model>, ServiceError> {
        Ok(modelo::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_all(&self) -> Result<Vec<modelo::Model>, ServiceError> {
        Ok(modelo::Entity::find().order_by_asc(modelo::Column::Id).all(&self.db).await?)
    }

    async fn insert(&self, input: &ModeloInput) -> Result<modelo::Model, ServiceError> {
        Ok(modelo::create(&self.db, &input.nome, input.peca_id).await?)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let res = modelo::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::empty_result(ENTITY, id));
        }
        Ok(())
    }
}
