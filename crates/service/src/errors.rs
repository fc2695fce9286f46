use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    EmptyResult(String),
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i32) -> Self {
        Self::NotFound(format!("Objeto não encontrado! Id: {}, Tipo: {}", id, entity))
    }

    pub fn empty_result(entity: &str, id: i32) -> Self {
        Self::EmptyResult(format!("No {} entity with id {} exists!", entity, id))
    }

    /// Like `From<ModelError>`, but names the row when nothing matched.
    pub fn for_row(entity: &'static str, id: i32) -> impl Fn(ModelError) -> Self {
        move |e| match e {
            ModelError::NoRowAffected => Self::empty_result(entity, id),
            other => other.into(),
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::Validation(msg),
            ModelError::Constraint(msg) => Self::ConstraintViolation(msg),
            ModelError::NoRowAffected => Self::EmptyResult("no row matched the statement".into()),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        ModelError::from(e).into()
    }
}
