use axum::{
    extract::{rejection::{JsonRejection, PathRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::{Deserialize, Serialize};
use service::peca_feira::PecaFeiraInput;
use tracing::info;

use crate::{errors::{ErrorBody, JsonApiError}, state::AppState};
use super::{created, list_or_no_content, IdRef};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct PecaFeiraBody {
    pub modelo: IdRef,
    pub quantidade: i32,
}

impl From<PecaFeiraBody> for PecaFeiraInput {
    fn from(b: PecaFeiraBody) -> Self {
        PecaFeiraInput { modelo_id: b.modelo.id, quantidade: b.quantidade }
    }
}

/// Summary view. The deletion flag is never serialised.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct PecaFeiraResumo {
    pub id: i32,
    pub modelo: IdRef,
    pub quantidade: i32,
}

impl From<models::peca_feira::Model> for PecaFeiraResumo {
    fn from(m: models::peca_feira::Model) -> Self {
        PecaFeiraResumo { id: m.id, modelo: IdRef { id: m.modelo_id }, quantidade: m.quantidade }
    }
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteQuery {
    /// Remove the row from storage instead of hiding it.
    #[serde(default)]
    pub permanente: bool,
}

#[utoipa::path(
    get, path = "/pecasfeira/{id}", tag = "pecasfeira",
    params(("id" = i32, Path, description = "Fair stock id")),
    responses(
        (status = 200, description = "OK", body = PecaFeiraResumo),
        (status = 404, description = "Not Found. O objeto solicitado não foi encontrado no servidor.", body = ErrorBody)
    )
)]
pub async fn find(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<PecaFeiraResumo>, JsonApiError> {
    let Path(id) = path?;
    let found = state.peca_feira.find(id).await?;
    Ok(Json(found.into()))
}

#[utoipa::path(
    get, path = "/pecasfeira", tag = "pecasfeira",
    responses(
        (status = 200, description = "OK", body = [PecaFeiraResumo]),
        (status = 204, description = "No Content")
    )
)]
pub async fn find_all(State(state): State<AppState>) -> Result<Response, JsonApiError> {
    let active = state.peca_feira.find_all().await?;
    Ok(list_or_no_content(active.into_iter().map(PecaFeiraResumo::from).collect()))
}

#[utoipa::path(
    post, path = "/pecasfeira", tag = "pecasfeira",
    request_body = PecaFeiraBody,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Bad Request. O objeto enviado no corpo da requisição é inválido.", body = ErrorBody)
    )
)]
pub async fn insert(
    State(state): State<AppState>,
    payload: Result<Json<PecaFeiraBody>, JsonRejection>,
) -> Result<Response, JsonApiError> {
    let Json(body) = payload?;
    let row = state.peca_feira.insert(body.into()).await?;
    info!(id = row.id, modelo_id = row.modelo_id, quantidade = row.quantidade, "created peca_feira");
    Ok(created(format!("/pecasfeira/{}", row.id)))
}

#[utoipa::path(
    put, path = "/pecasfeira/{id}", tag = "pecasfeira",
    params(("id" = i32, Path, description = "Fair stock id")),
    request_body = PecaFeiraBody,
    responses(
        (status = 204, description = "No Content"),
        (status = 400, description = "Bad Request. O objeto enviado no corpo da requisição é inválido.", body = ErrorBody),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PecaFeiraBody>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = path?;
    let Json(body) = payload?;
    state.peca_feira.update(id, body.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/pecasfeira/{id}", tag = "pecasfeira",
    params(("id" = i32, Path, description = "Fair stock id"), DeleteQuery),
    responses(
        (status = 204, description = "No Content"),
        (status = 400, description = "Bad Request. O parâmetro enviado não corresponde a nenhum objeto no servidor.", body = ErrorBody),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    query: Result<Query<DeleteQuery>, QueryRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = path?;
    let Query(q) = query?;
    if q.permanente {
        state.peca_feira.purge(id).await?;
        info!(id, "purged peca_feira");
    } else {
        state.peca_feira.delete(id).await?;
        info!(id, "soft deleted peca_feira");
    }
    Ok(StatusCode::NO_CONTENT)
}
