use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use models::db::{connect_migrated, DatabaseConfig};
use serde_json::Value;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes;
use server::state::AppState;

pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl Reply {
    pub fn location(&self) -> Option<&str> {
        self.headers.get(header::LOCATION).and_then(|v| v.to_str().ok())
    }
}

/// Router over a freshly migrated SQLite file.
pub async fn build_app() -> anyhow::Result<Router> {
    let path = std::env::temp_dir().join(format!("agef-server-{}.db", Uuid::new_v4()));
    let cfg = DatabaseConfig::with_url(format!("sqlite://{}?mode=rwc", path.display()));
    let db = connect_migrated(&cfg).await?;
    Ok(routes::build_router(AppState::new(db), CorsLayer::very_permissive()))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> anyhow::Result<Reply> {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&v)?)
        }
        None => Body::empty(),
    };
    let res = app.clone().oneshot(req.body(body)?).await?;
    let status = res.status();
    let headers = res.headers().clone();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() { None } else { Some(serde_json::from_slice(&bytes)?) };
    Ok(Reply { status, headers, body })
}

pub async fn get(app: &Router, uri: &str) -> anyhow::Result<Reply> {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> anyhow::Result<Reply> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> anyhow::Result<Reply> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> anyhow::Result<Reply> {
    send(app, Method::DELETE, uri, None).await
}
