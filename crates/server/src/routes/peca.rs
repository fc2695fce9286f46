use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::{Deserialize, Serialize};
use service::peca::PecaInput;
use tracing::info;

use crate::{errors::{ErrorBody, JsonApiError}, state::AppState};
use super::{created, list_or_no_content};

/// Request body; an `id` sent by the client is ignored.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct PecaBody {
    pub nome: String,
    pub tamanho: i32,
}

impl From<PecaBody> for PecaInput {
    fn from(b: PecaBody) -> Self {
        PecaInput { nome: b.nome, tamanho: b.tamanho }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct PecaView {
    pub id: i32,
    pub nome: String,
    pub tamanho: i32,
}

impl From<models::peca::Model> for PecaView {
    fn from(m: models::peca::Model) -> Self {
        PecaView { id: m.id, nome: m.nome, tamanho: m.tamanho }
    }
}

#[utoipa::path(
    get, path = "/peca/{id}", tag = "peca",
    params(("id" = i32, Path, description = "Part id")),
    responses(
        (status = 200, description = "OK", body = PecaView),
        (status = 404, description = "Not Found. O objeto solicitado não foi encontrado no servidor.", body = ErrorBody)
    )
)]
pub async fn find(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<PecaView>, JsonApiError> {
    let Path(id) = path?;
    let found = state.peca.find(id).await?;
    Ok(Json(found.into()))
}

#[utoipa::path(
    get, path = "/peca", tag = "peca",
    responses(
        (status = 200, description = "OK", body = [PecaView]),
        (status = 204, description = "No Content")
    )
)]
pub async fn find_all(State(state): State<AppState>) -> Result<Response, JsonApiError> {
    let all = state.peca.find_all().await?;
    Ok(list_or_no_content(all.into_iter().map(PecaView::from).collect()))
}

#[utoipa::path(
    post, path = "/peca", tag = "peca",
    request_body = PecaBody,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Bad Request. O objeto enviado no corpo da requisição é inválido.", body = ErrorBody)
    )
)]
pub async fn insert(
    State(state): State<AppState>,
    payload: Result<Json<PecaBody>, JsonRejection>,
) -> Result<Response, JsonApiError> {
    let Json(body) = payload?;
    let p = state.peca.insert(body.into()).await?;
    info!(id = p.id, nome = %p.nome, "created peca");
    Ok(created(format!("/peca/{}", p.id)))
}

#[utoipa::path(
    put, path = "/peca/{id}", tag = "peca",
    params(("id" = i32, Path, description = "Part id")),
    request_body = PecaBody,
    responses(
        (status = 204, description = "No Content"),
        (status = 400, description = "Bad Request. O objeto enviado no corpo da requisição é inválido.", body = ErrorBody),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PecaBody>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = path?;
    let Json(body) = payload?;
    state.peca.update(id, body.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/peca/{id}", tag = "peca",
    params(("id" = i32, Path, description = "Part id")),
    responses(
        (status = 204, description = "No Content"),
        (status = 400, description = "Bad Request. A peça é referenciada ou não existe.", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = path?;
    state.peca.delete(id).await?;
    info!(id, "deleted peca");
    Ok(StatusCode::NO_CONTENT)
}
