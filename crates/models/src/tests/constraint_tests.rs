use anyhow::Result;
use sea_orm::EntityTrait;

use super::test_db;
use crate::errors::ModelError;
use crate::{modelo, peca, peca_feira};

#[tokio::test]
async fn test_delete_referenced_peca_is_rejected() -> Result<()> {
    let db = test_db().await?;
    let p = peca::create(&db, "Wheel", 42).await?;
    let m = modelo::create(&db, "Wheel 2024", p.id).await?;

    let res = peca::Entity::delete_by_id(p.id).exec(&db).await.map_err(ModelError::from);
    assert!(matches!(res, Err(ModelError::Constraint(_))));

    // both rows unchanged
    assert_eq!(peca::Entity::find_by_id(p.id).one(&db).await?, Some(p));
    assert_eq!(modelo::Entity::find_by_id(m.id).one(&db).await?, Some(m));
    Ok(())
}

#[tokio::test]
async fn test_unknown_foreign_key_is_rejected() -> Result<()> {
    let db = test_db().await?;
    assert!(matches!(modelo::create(&db, "Orphan", 404).await, Err(ModelError::Constraint(_))));
    assert!(matches!(peca_feira::create(&db, 404, 1).await, Err(ModelError::Constraint(_))));
    Ok(())
}

#[tokio::test]
async fn test_find_active_skips_soft_deleted() -> Result<()> {
    let db = test_db().await?;
    let p = peca::create(&db, "Wheel", 42).await?;
    let m = modelo::create(&db, "Wheel 2024", p.id).await?;

    let mut ids = vec![];
    for q in 0..5 {
        ids.push(peca_feira::create(&db, m.id, q).await?.id);
    }
    peca_feira::mark_deleted(&db, ids[1]).await?;
    peca_feira::mark_deleted(&db, ids[3]).await?;

    let active = peca_feira::find_active(&db).await?;
    assert!(active.iter().all(|r| !r.deletado));
    let active_ids: Vec<i32> = active.iter().map(|r| r.id).collect();
    assert_eq!(active_ids, vec![ids[0], ids[2], ids[4]]);

    // hidden rows stay in storage
    let hidden = peca_feira::Entity::find_by_id(ids[1]).one(&db).await?.unwrap();
    assert!(hidden.deletado);
    Ok(())
}

#[tokio::test]
async fn test_mark_deleted_twice_or_missing() -> Result<()> {
    let db = test_db().await?;
    let p = peca::create(&db, "Wheel", 42).await?;
    let m = modelo::create(&db, "Wheel 2024", p.id).await?;
    let pf = peca_feira::create(&db, m.id, 3).await?;

    peca_feira::mark_deleted(&db, pf.id).await?;
    assert!(matches!(peca_feira::mark_deleted(&db, pf.id).await, Err(ModelError::NoRowAffected)));
    assert!(matches!(peca_feira::mark_deleted(&db, 999).await, Err(ModelError::NoRowAffected)));
    Ok(())
}

#[tokio::test]
async fn test_hidden_stock_still_blocks_modelo_delete() -> Result<()> {
    let db = test_db().await?;
    let p = peca::create(&db, "Wheel", 42).await?;
    let m = modelo::create(&db, "Wheel 2024", p.id).await?;
    let pf = peca_feira::create(&db, m.id, 3).await?;
    peca_feira::mark_deleted(&db, pf.id).await?;

    let res = modelo::Entity::delete_by_id(m.id).exec(&db).await.map_err(ModelError::from);
    assert!(matches!(res, Err(ModelError::Constraint(_))));

    peca_feira::Entity::delete_by_id(pf.id).exec(&db).await?;
    modelo::Entity::delete_by_id(m.id).exec(&db).await?;
    assert!(modelo::Entity::find_by_id(m.id).one(&db).await?.is_none());
    Ok(())
}
