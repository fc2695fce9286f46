use std::sync::Arc;

use models::peca;
use tracing::{info, instrument};

use super::{domain::PecaInput, repository::PecaRepository, ENTITY};
use crate::errors::ServiceError;

/// Application service for the part catalog.
pub struct PecaService<R: PecaRepository> {
    repo: Arc<R>,
}

impl<R: PecaRepository> PecaService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Look up a part; absent ids fail with `NotFound`.
    ///
    /// # Examples
    /// ```
    /// use service::peca::{repository::mock::MockPecaRepository, PecaInput, PecaService};
    /// use service::errors::ServiceError;
    /// use std::sync::Arc;
    /// let svc = PecaService::new(Arc::new(MockPecaRepository::default()));
    /// let created = tokio_test::block_on(svc.insert(PecaInput { nome: "Wheel".into(), tamanho: 42 })).unwrap();
    /// assert_eq!(tokio_test::block_on(svc.find(created.id)).unwrap(), created);
    /// assert!(matches!(tokio_test::block_on(svc.find(99)), Err(ServiceError::NotFound(_))));
    /// ```
    #[instrument(skip(self))]
    pub async fn find(&self, id: i32) -> Result<peca::Model, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    pub async fn find_all(&self) -> Result<Vec<peca::Model>, ServiceError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self, input), fields(nome = %input.nome))]
    pub async fn insert(&self, input: PecaInput) -> Result<peca::Model, ServiceError> {
        validate(&input)?;
        let created = self.repo.insert(&input).await?;
        info!(id = created.id, "peca created");
        Ok(created)
    }

    /// Replace every field of an existing part. Unknown ids fail before any write.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: PecaInput) -> Result<peca::Model, ServiceError> {
        validate(&input)?;
        self.find(id).await?;
        let merged = peca::Model { id, nome: input.nome, tamanho: input.tamanho };
        self.repo.update(&merged).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        info!(id, "peca deleted");
        Ok(())
    }
}

fn validate(input: &PecaInput) -> Result<(), ServiceError> {
    peca::validate_nome(&input.nome)?;
    peca::validate_tamanho(input.tamanho)?;
    Ok(())
}
