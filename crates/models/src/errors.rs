use sea_orm::{DbErr, SqlErr};

/// SQLite reports a blocked parent delete as extended code 1811 with this text,
/// which `DbErr::sql_err` does not classify.
const SQLITE_FK_FAILED: &str = "FOREIGN KEY constraint failed";
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("no row matched the statement")]
    NoRowAffected,
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        if matches!(e, DbErr::RecordNotUpdated) {
            return ModelError::NoRowAffected;
        }
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => ModelError::Constraint(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => ModelError::Constraint(msg),
            _ => {
                let msg = e.to_string();
                if msg.contains(SQLITE_FK_FAILED) {
                    ModelError::Constraint(msg)
                } else {
                    ModelError::Db(msg)
                }
            }
        }
    }
}
