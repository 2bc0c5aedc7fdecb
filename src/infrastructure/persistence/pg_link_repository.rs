//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct LinkRow {
    id: i64,
    name: String,
    url: String,
    icon: Option<String>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(r.id, r.name, r.url, r.icon)
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Uses SQLx bound parameters for SQL injection protection.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (name, url, icon)
            VALUES ($1, $2, $3)
            RETURNING id, name, url, icon
            "#,
        )
        .bind(new_link.name)
        .bind(new_link.url)
        .bind(new_link.icon)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, name, url, icon
            FROM links
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, name, url, icon
            FROM links
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn update(&self, id: i64, patch: LinkPatch) -> Result<Option<Link>, AppError> {
        let update_icon = patch.icon.is_some();
        let new_icon = patch.icon.flatten();

        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            UPDATE links SET
                name = COALESCE($2::VARCHAR, name),
                url  = COALESCE($3::VARCHAR, url),
                icon = CASE WHEN $4 THEN $5::VARCHAR ELSE icon END
            WHERE id = $1
            RETURNING id, name, url, icon
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.url)
        .bind(update_icon)
        .bind(new_icon)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
