mod common;

use axum::http::StatusCode;
use axum::Router;
use serde_json::json;

use common::{build_app, delete, get, post, put};

/// Two parts and two models so model ids and stock ids diverge.
async fn seed(app: &Router) -> anyhow::Result<()> {
    post(app, "/peca", json!({"nome": "Wheel", "tamanho": 42})).await?;
    post(app, "/peca", json!({"nome": "Axle", "tamanho": 3})).await?;
    post(app, "/modelo", json!({"nome": "Wheel 2024", "peca": {"id": 1}})).await?;
    post(app, "/modelo", json!({"nome": "Axle 2024", "peca": {"id": 2}})).await?;
    Ok(())
}

#[tokio::test]
async fn insert_points_location_at_own_id() -> anyhow::Result<()> {
    let app = build_app().await?;
    seed(&app).await?;

    let res = post(&app, "/pecasfeira", json!({"modelo": {"id": 2}, "quantidade": 10})).await?;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.location(), Some("/pecasfeira/1"));

    let res = get(&app, "/pecasfeira/1").await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, Some(json!({"id": 1, "modelo": {"id": 2}, "quantidade": 10})));
    Ok(())
}

#[tokio::test]
async fn unknown_model_is_constraint_violation() -> anyhow::Result<()> {
    let app = build_app().await?;
    let res = post(&app, "/pecasfeira", json!({"modelo": {"id": 8}, "quantidade": 1})).await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body.unwrap()["message"], "Existe alguma constraint na entidade sendo utilizada.");
    assert_eq!(get(&app, "/pecasfeira").await?.status, StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn update_replaces_model_and_stock() -> anyhow::Result<()> {
    let app = build_app().await?;
    seed(&app).await?;
    post(&app, "/pecasfeira", json!({"modelo": {"id": 1}, "quantidade": 10})).await?;

    let res = put(&app, "/pecasfeira/1", json!({"modelo": {"id": 2}, "quantidade": 4})).await?;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert_eq!(
        get(&app, "/pecasfeira/1").await?.body,
        Some(json!({"id": 1, "modelo": {"id": 2}, "quantidade": 4}))
    );

    let res = put(&app, "/pecasfeira/9", json!({"modelo": {"id": 2}, "quantidade": 4})).await?;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn delete_hides_then_purge_removes() -> anyhow::Result<()> {
    let app = build_app().await?;
    seed(&app).await?;
    post(&app, "/pecasfeira", json!({"modelo": {"id": 1}, "quantidade": 10})).await?;
    post(&app, "/pecasfeira", json!({"modelo": {"id": 2}, "quantidade": 5})).await?;

    assert_eq!(delete(&app, "/pecasfeira/1").await?.status, StatusCode::NO_CONTENT);

    // hidden from reads and listing
    assert_eq!(get(&app, "/pecasfeira/1").await?.status, StatusCode::NOT_FOUND);
    assert_eq!(
        get(&app, "/pecasfeira").await?.body,
        Some(json!([{"id": 2, "modelo": {"id": 2}, "quantidade": 5}]))
    );
    assert_eq!(delete(&app, "/pecasfeira/1").await?.status, StatusCode::NOT_FOUND);

    // still stored: the model it points at cannot go away
    let res = delete(&app, "/modelo/1").await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    assert_eq!(delete(&app, "/pecasfeira/1?permanente=true").await?.status, StatusCode::NO_CONTENT);
    assert_eq!(delete(&app, "/pecasfeira/1?permanente=true").await?.status, StatusCode::BAD_REQUEST);
    assert_eq!(delete(&app, "/modelo/1").await?.status, StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn listing_is_no_content_when_everything_is_hidden() -> anyhow::Result<()> {
    let app = build_app().await?;
    seed(&app).await?;
    post(&app, "/pecasfeira", json!({"modelo": {"id": 1}, "quantidade": 1})).await?;
    delete(&app, "/pecasfeira/1").await?;
    assert_eq!(get(&app, "/pecasfeira").await?.status, StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_bad_request() -> anyhow::Result<()> {
    let app = build_app().await?;
    let res = post(&app, "/pecasfeira", json!({"modelo": 1, "quantidade": "many"})).await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body.unwrap()["error"], "Bad Request");
    Ok(())
}

#[tokio::test]
async fn out_of_range_id_and_bad_flag_get_json_errors() -> anyhow::Result<()> {
    let app = build_app().await?;
    seed(&app).await?;
    post(&app, "/pecasfeira", json!({"modelo": {"id": 1}, "quantidade": 1})).await?;

    let res = get(&app, "/pecasfeira/99999999999").await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body.expect("json error body")["status"], 400);

    let res = delete(&app, "/pecasfeira/1?permanente=sim").await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    let body = res.body.expect("json error body");
    assert!(body["message"].as_str().unwrap().starts_with("O parâmetro enviado na requisição é inválido."));

    // the row was left alone
    assert_eq!(get(&app, "/pecasfeira/1").await?.status, StatusCode::OK);
    Ok(())
}
