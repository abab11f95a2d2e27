use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the pool, then apply migrations and demo data as configured.
pub async fn bootstrap_db(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    if cfg.is_sqlite() {
        common::env::ensure_database_dir(&cfg.url).await?;
    }
    let db = models::db::connect_with_config(cfg).await?;
    if cfg.run_migrations {
        migration::Migrator::up(&db, None).await?;
        info!(event = "migrations_applied", "schema up to date");
    }
    if cfg.seed_demo_data {
        service::seed::seed_demo_data(&db).await?;
    }
    Ok(db)
}

pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(build_cors(), ServerState { db })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = bootstrap_db(&cfg.database).await?;
    let app = build_app(db.clone());

    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "starting server crate");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    Ok(())
}
