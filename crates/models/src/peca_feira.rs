use sea_orm::{entity::prelude::*, sea_query::Expr, Set, DatabaseConnection, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, modelo};

/// Stock of one model at the fair. Rows with `deletado = true` are hidden.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "peca_feira")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub modelo_id: i32,
    pub quantidade: i32,
    pub deletado: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Modelo }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Modelo => Entity::belongs_to(modelo::Entity)
                .from(Column::ModeloId)
                .to(modelo::Column::Id)
                .into(),
        }
    }
}

impl Related<modelo::Entity> for Entity {
    fn to() -> RelationDef { Relation::Modelo.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_quantidade(quantidade: i32) -> Result<(), ModelError> {
    if quantidade < 0 {
        return Err(ModelError::Validation("quantidade must be >= 0".into()));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, modelo_id: i32, quantidade: i32) -> Result<Model, ModelError> {
    validate_quantidade(quantidade)?;
    let am = ActiveModel {
        modelo_id: Set(modelo_id),
        quantidade: Set(quantidade),
        deletado: Set(false),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Overwrite model and stock of row `id`; the deletion flag is left alone.
pub async fn replace(db: &DatabaseConnection, id: i32, modelo_id: i32, quantidade: i32) -> Result<Model, ModelError> {
    validate_quantidade(quantidade)?;
    let am = ActiveModel {
        id: Set(id),
        modelo_id: Set(modelo_id),
        quantidade: Set(quantidade),
        ..Default::default()
    };
    Ok(am.update(db).await?)
}

/// Rows not hidden by soft delete, in id order.
pub async fn find_active(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find()
        .filter(Column::Deletado.eq(false))
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Soft delete. Fails with `NoRowAffected` when `id` is absent or already hidden.
pub async fn mark_deleted(db: &DatabaseConnection, id: i32) -> Result<(), ModelError> {
    let res = Entity::update_many()
        .col_expr(Column::Deletado, Expr::value(true))
        .filter(Column::Id.eq(id))
        .filter(Column::Deletado.eq(false))
        .exec(db)
        .await?;
    if res.rows_affected == 0 {
        return Err(ModelError::NoRowAffected);
    }
    Ok(())
}
