//! PostgreSQL connection management and repository implementations.
//!
//! The pool is opened explicitly by the caller (server or admin CLI) and
//! handed to repositories; nothing here holds a global connection.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Link storage and retrieval

pub mod pg_link_repository;

pub use pg_link_repository::PgLinkRepository;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::config::Config;

/// Embedded schema migrations from `./migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens a connection pool using the pool settings from [`Config`].
///
/// # Errors
///
/// Returns an error if the database is unreachable or rejects the credentials.
pub async fn connect(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

/// Applies pending schema migrations.
///
/// Invoked from the admin CLI; the server never migrates on boot.
///
/// # Errors
///
/// Returns an error if a migration fails or the recorded history diverges
/// from the embedded migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("Failed to apply migrations")
}
