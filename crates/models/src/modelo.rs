use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, peca};

/// A concrete model of a catalog part; fair stock is kept per model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "modelo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nome: String,
    pub peca_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Peca }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Peca => Entity::belongs_to(peca::Entity)
                .from(Column::PecaId)
                .to(peca::Column::Id)
                .into(),
        }
    }
}

impl Related<peca::Entity> for Entity {
    fn to() -> RelationDef { Relation::Peca.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_nome(nome: &str) -> Result<(), ModelError> {
    if nome.trim().is_empty() {
        return Err(ModelError::Validation("nome is required".into()));
    }
    if nome.chars().count() > peca::NOME_MAX_LEN {
        return Err(ModelError::Validation(format!("nome must be at most {} characters", peca::NOME_MAX_LEN)));
    }
    Ok(())
}

/// Insert a model; an unknown `peca_id` is rejected by the foreign key.
pub async fn create(db: &DatabaseConnection, nome: &str, peca_id: i32) -> Result<Model, ModelError> {
    validate_nome(nome)?;
    let am = ActiveModel {
        nome: Set(nome.to_string()),
        peca_id: Set(peca_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
