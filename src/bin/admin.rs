//! CLI administration tool for the link directory.
//!
//! Provides schema migration, database checks, and link/image inspection
//! without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # List links
//! cargo run --bin admin -- links list
//!
//! # Delete a link
//! cargo run --bin admin -- links delete 42
//!
//! # List icon images
//! cargo run --bin admin -- images list
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection
//! - `IMAGES_DIR` (optional): icon directory, default `images`

use link_directory::application::services::{ImageService, LinkService};
use link_directory::config::{self, Config};
use link_directory::infrastructure::persistence::{self, PgLinkRepository};
use link_directory::infrastructure::storage::FsImageStore;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the link directory.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Manage links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Inspect the icon image directory
    Images {
        #[command(subcommand)]
        action: ImageAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Apply pending schema migrations
    Migrate,

    /// Check database connection
    Check,
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links
    List,

    /// Permanently delete a link
    Delete {
        /// Link id
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Image directory subcommands.
#[derive(Subcommand)]
enum ImageAction {
    /// List recognized images
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &config).await?,
        Commands::Links { action } => handle_link_action(action, &config).await?,
        Commands::Images { action } => handle_image_action(action, &config).await?,
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, config: &Config) -> Result<()> {
    let pool = persistence::connect(config).await?;

    let result = match action {
        DbAction::Migrate => migrate(&pool).await,
        DbAction::Check => check_database(&pool).await,
    };

    pool.close().await;
    result
}

/// Applies pending migrations and reports how many were already applied.
async fn migrate(pool: &PgPool) -> Result<()> {
    println!("{}", "🛠  Applying migrations".bright_blue().bold());
    println!();

    persistence::run_migrations(pool).await?;

    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await?;

    println!("{}", "✅ Schema is up to date".green().bold());
    println!(
        "  Applied migrations: {}",
        applied.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Verifies connectivity and prints the server version.
async fn check_database(pool: &PgPool) -> Result<()> {
    println!("{}", "🔍 Checking database connection".bright_blue().bold());
    println!();

    let version: String = sqlx::query_scalar("SELECT version()").fetch_one(pool).await?;

    println!("{}", "✅ Database connection OK".green().bold());
    println!("  Version: {}", version.bright_black());
    println!();

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, config: &Config) -> Result<()> {
    let pool = Arc::new(persistence::connect(config).await?);
    let service = LinkService::new(Arc::new(PgLinkRepository::new(pool.clone())));

    let result = match action {
        LinkAction::List => list_links(&service).await,
        LinkAction::Delete { id, yes } => delete_link(&service, id, yes).await,
    };

    pool.close().await;
    result
}

/// Lists all links as a table.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   ID    Name                      URL                                      Icon
///   ───────────────────────────────────────────────────────────────────────────────
///   1     Docs                      https://example.com                      docs.png
/// ```
async fn list_links(service: &LinkService) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let links = service
        .get_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<25} {:<40} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "URL".bright_white().bold(),
        "Icon".bright_white().bold()
    );
    println!("  {}", "─".repeat(79).bright_black());

    for link in &links {
        println!(
            "  {:<5} {:<25} {:<40} {}",
            link.id.to_string().bright_black(),
            link.name.cyan(),
            link.url,
            link.icon.as_deref().unwrap_or("-").bright_black()
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes a link after showing it and asking for confirmation.
async fn delete_link(service: &LinkService, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Link".bright_blue().bold());
    println!();

    let link = service
        .get_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  Name: {}", link.name.cyan());
    println!("  URL:  {}", link.url);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link permanently?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

/// Dispatches image directory commands.
async fn handle_image_action(action: ImageAction, config: &Config) -> Result<()> {
    let service = ImageService::new(Arc::new(FsImageStore::new(config.images_dir.clone())));

    match action {
        ImageAction::List => {
            println!(
                "{} {}",
                "🖼  Images in".bright_blue().bold(),
                config.images_dir.display().to_string().cyan()
            );
            println!();

            let images = service
                .list_images()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list images: {}", e))?;

            if images.is_empty() {
                println!("{}", "  No images found".yellow());
            }
            for name in &images {
                println!("  {}", name);
            }
            println!();
        }
    }

    Ok(())
}
