use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::init_logging_default;
use configs::{AppConfig, StorageBackend};
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn load_bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| cfg.server.host.clone());
    let port = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(cfg.server.port);
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Wire repositories for the configured backend. Postgres applies pending
/// migrations on the way up; the settings defaulting layer means neither
/// backend needs seed data.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    match cfg.storage.backend {
        StorageBackend::Memory => {
            info!(backend = "memory", "storage backend selected");
            Ok(ServerState::in_memory())
        }
        StorageBackend::Postgres => {
            info!(backend = "postgres", "storage backend selected");
            let db = models::db::connect_with_config(&cfg.database).await?;
            migration::Migrator::up(&db, None).await?;
            Ok(ServerState::with_database(db))
        }
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = AppConfig::load_and_validate()?;

    common::env::ensure_env(&cfg.server.static_dir).await?;

    let state = build_state(&cfg).await?;

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(state, cors, &cfg.server.static_dir);

    // Bind and serve
    let addr = load_bind_addr(&cfg)?;
    info!(%addr, "starting catalog/inquiry server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
