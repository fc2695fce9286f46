use async_trait::async_trait;
use models::peca;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::{domain::PecaInput, ENTITY};
use crate::errors::ServiceError;

#[async_trait]
pub trait PecaRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<peca::Model>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<peca::Model>, ServiceError>;
    async fn insert(&self, input: &PecaInput) -> Result<peca::Model, ServiceError>;
    /// Full replace. `EmptyResult` when the row is gone.
    async fn update(&self, peca: &peca::Model) -> Result<peca::Model, ServiceError>;
    /// `EmptyResult` when nothing was deleted, `ConstraintViolation` when still referenced.
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmPecaRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl PecaRepository for SeaOrmPecaRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<peca::Model>, ServiceError> {
        Ok(peca::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_all(&self) -> Result<Vec<peca::Model>, ServiceError> {
        Ok(peca::Entity::find().order_by_asc(peca::Column::Id).all(&self.db).await?)
    }

    async fn insert(&self, input: &PecaInput) -> Result<peca::Model, ServiceError> {
        Ok(peca::create(&self.db, &input.nome, input.tamanho).await?)
    }

    async fn update(&self, p: &peca::Model) -> Result<peca::Model, ServiceError> {
        peca::replace(&self.db, p.id, &p.nome, p.tamanho)
            .await
            .map_err(ServiceError::for_row(ENTITY, p.id))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let res = peca::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::empty_result(ENTITY, id));
        }
        Ok(())
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::{BTreeMap, HashSet};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockPecaRepository {
        rows: Mutex<BTreeMap<i32, peca::Model>>,
        last_id: Mutex<i32>,
        referenced: Mutex<HashSet<i32>>, // ids that another row points at
    }

    impl MockPecaRepository {
        /// Pretend another table holds a foreign key to `id`.
        pub fn reference(&self, id: i32) {
            self.referenced.lock().unwrap().insert(id);
        }

        pub fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl PecaRepository for MockPecaRepository {
        async fn find_by_id(&self, id: i32) -> Result<Option<peca::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<peca::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn insert(&self, input: &PecaInput) -> Result<peca::Model, ServiceError> {
            let mut last_id = self.last_id.lock().unwrap();
            *last_id += 1;
            let row = peca::Model { id: *last_id, nome: input.nome.clone(), tamanho: input.tamanho };
            self.rows.lock().unwrap().insert(row.id, row.clone());
            Ok(row)
        }

        async fn update(&self, p: &peca::Model) -> Result<peca::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.get_mut(&p.id) {
                Some(row) => {
                    *row = p.clone();
                    Ok(p.clone())
                }
                None => Err(ServiceError::empty_result(ENTITY, p.id)),
            }
        }

        async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
            if self.referenced.lock().unwrap().contains(&id) {
                return Err(ServiceError::ConstraintViolation(format!("peca {} is referenced", id)));
            }
            match self.rows.lock().unwrap().remove(&id) {
                Some(_) => Ok(()),
                None => Err(ServiceError::empty_result(ENTITY, id)),
            }
        }
    }
}
