//! HTTP server initialization and runtime setup.
//!
//! Owns the lifecycle of the database pool: opened before the listener binds,
//! closed after the server has drained on shutdown.

use crate::config::Config;
use crate::infrastructure::persistence::{self, PgLinkRepository};
use crate::infrastructure::storage::FsImageStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Image directory (created if absent)
/// - Axum HTTP server with graceful shutdown
///
/// Schema migrations are not applied here; run `admin db migrate` first.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Image directory cannot be created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = persistence::connect(&config).await?;
    tracing::info!("Connected to database");

    let pool = Arc::new(pool);
    let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
    let image_store = Arc::new(FsImageStore::new(config.images_dir.clone()));

    let state = AppState::new(link_repository, image_store);
    state
        .image_service
        .ensure_dir()
        .await
        .with_context(|| {
            format!(
                "Failed to create images directory {}",
                config.images_dir.display()
            )
        })?;
    tracing::info!(dir = %config.images_dir.display(), "Image directory ready");

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Database pool closed, shutdown complete");

    Ok(())
}

/// Resolves when the process receives Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
