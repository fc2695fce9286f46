use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::AppState;
use models::db::{connect_migrated, connect_with_config, DatabaseConfig};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load config from file, falling back to env vars
pub fn load_config() -> anyhow::Result<AppConfig> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            warn!(error = %e, "config file not usable; using SERVER_HOST/SERVER_PORT/DATABASE_URL");
            AppConfig::from_env()
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Build the app from a loaded config and serve until Ctrl+C.
/// The caller is expected to have loaded `.env` and initialised logging.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    // DB connection pool
    let db_cfg = DatabaseConfig::from(&cfg.database);
    let db = if cfg.database.auto_migrate {
        connect_migrated(&db_cfg).await?
    } else {
        connect_with_config(&db_cfg).await?
    };

    let app = routes::build_router(AppState::new(db), build_cors());

    // Bind and serve
    let listener = TcpListener::bind((cfg.server.host.as_str(), cfg.server.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "starting agef server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}
