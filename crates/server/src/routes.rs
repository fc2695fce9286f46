use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod modelo;
pub mod peca;
pub mod peca_feira;

/// Reference to another row by id, e.g. `"modelo": {"id": 3}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct IdRef {
    pub id: i32,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// 201 with `Location` pointing at the new row.
pub(crate) fn created(location: String) -> Response {
    (StatusCode::CREATED, [(header::LOCATION, location)]).into_response()
}

/// 200 with the list, or 204 when there is nothing to list.
pub(crate) fn list_or_no_content<T: Serialize>(items: Vec<T>) -> Response {
    if items.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        Json(items).into_response()
    }
}

/// Build the full application router: the routing table for every resource.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let pecas = Router::new()
        .route("/peca", get(peca::find_all).post(peca::insert))
        .route("/peca/:id", get(peca::find).put(peca::update).delete(peca::delete));

    let pecas_feira = Router::new()
        .route("/pecasfeira", get(peca_feira::find_all).post(peca_feira::insert))
        .route(
            "/pecasfeira/:id",
            get(peca_feira::find).put(peca_feira::update).delete(peca_feira::delete),
        );

    let modelos = Router::new()
        .route("/modelo", get(modelo::find_all).post(modelo::insert))
        .route("/modelo/:id", get(modelo::find).delete(modelo::delete));

    public
        .merge(pecas)
        .merge(pecas_feira)
        .merge(modelos)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
