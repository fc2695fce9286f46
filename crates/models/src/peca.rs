use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A catalog part.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "peca")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nome: String,
    pub tamanho: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub const NOME_MAX_LEN: usize = 128;

pub fn validate_nome(nome: &str) -> Result<(), ModelError> {
    if nome.trim().is_empty() {
        return Err(ModelError::Validation("nome is required".into()));
    }
    if nome.chars().count() > NOME_MAX_LEN {
        return Err(ModelError::Validation(format!("nome must be at most {NOME_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_tamanho(tamanho: i32) -> Result<(), ModelError> {
    if tamanho < 0 {
        return Err(ModelError::Validation("tamanho must be >= 0".into()));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, nome: &str, tamanho: i32) -> Result<Model, ModelError> {
    validate_nome(nome)?;
    validate_tamanho(tamanho)?;
    let am = ActiveModel {
        nome: Set(nome.to_string()),
        tamanho: Set(tamanho),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Overwrite every mutable column of row `id`.
pub async fn replace(db: &DatabaseConnection, id: i32, nome: &str, tamanho: i32) -> Result<Model, ModelError> {
    validate_nome(nome)?;
    validate_tamanho(tamanho)?;
    let am = ActiveModel {
        id: Set(id),
        nome: Set(nome.to_string()),
        tamanho: Set(tamanho),
    };
    Ok(am.update(db).await?)
}
