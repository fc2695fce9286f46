use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::{Deserialize, Serialize};
use service::modelo::ModeloInput;
use tracing::info;

use crate::{errors::{ErrorBody, JsonApiError}, state::AppState};
use super::{created, list_or_no_content, IdRef};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ModeloBody {
    pub nome: String,
    pub peca: IdRef,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ModeloView {
    pub id: i32,
    pub nome: String,
    pub peca: IdRef,
}

impl From<models::modelo::Model> for ModeloView {
    fn from(m: models::modelo::Model) -> Self {
        ModeloView { id: m.id, nome: m.nome, peca: IdRef { id: m.peca_id } }
    }
}

#[utoipa::path(
    get, path = "/modelo/{id}", tag = "modelo",
    params(("id" = i32, Path, description = "Model id")),
    responses(
        (status = 200, description = "OK", body = ModeloView),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn find(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<ModeloView>, JsonApiError> {
    let Path(id) = path?;
    Ok(Json(state.modelo.find(id).await?.into()))
}

#[utoipa::path(
    get, path = "/modelo", tag = "modelo",
    responses(
        (status = 200, description = "OK", body = [ModeloView]),
        (status = 204, description = "No Content")
    )
)]
pub async fn find_all(State(state): State<AppState>) -> Result<Response, JsonApiError> {
    let all = state.modelo.find_all().await?;
    Ok(list_or_no_content(all.into_iter().map(ModeloView::from).collect()))
}

#[utoipa::path(
    post, path = "/modelo", tag = "modelo",
    request_body = ModeloBody,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Bad Request", body = ErrorBody)
    )
)]
pub async fn insert(
    State(state): State<AppState>,
    payload: Result<Json<ModeloBody>, JsonRejection>,
) -> Result<Response, JsonApiError> {
    let Json(body) = payload?;
    let m = state
        .modelo
        .insert(ModeloInput { nome: body.nome, peca_id: body.peca.id })
        .await?;
    info!(id = m.id, peca_id = m.peca_id, "created modelo");
    Ok(created(format!("/modelo/{}", m.id)))
}

#[utoipa::path(
    delete, path = "/modelo/{id}", tag = "modelo",
    params(("id" = i32, Path, description = "Model id")),
    responses(
        (status = 204, description = "No Content"),
        (status = 400, description = "Bad Request", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = path?;
    state.modelo.delete(id).await?;
    info!(id, "deleted modelo");
    Ok(StatusCode::NO_CONTENT)
}
