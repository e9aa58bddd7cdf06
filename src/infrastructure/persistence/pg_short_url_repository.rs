//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::errors::RepositoryError;
use crate::domain::repositories::ShortUrlRepository;
use crate::utils::db_error::map_sqlx_error;

const COLUMNS: &str = "id, short_code, original_url, shortened_url, created_at";

#[derive(Debug, FromRow)]
struct ShortUrlRow {
    id: i64,
    short_code: String,
    original_url: String,
    shortened_url: String,
    created_at: DateTime<Utc>,
}

impl From<ShortUrlRow> for ShortUrl {
    fn from(row: ShortUrlRow) -> Self {
        ShortUrl::new(
            row.id,
            row.short_code,
            row.original_url,
            row.shortened_url,
            row.created_at,
        )
    }
}

/// PostgreSQL repository for short URL storage and retrieval.
///
/// Code uniqueness is enforced by the `short_urls_short_code_key` constraint;
/// a violation surfaces as [`RepositoryError::CodeConflict`].
pub struct PgShortUrlRepository {
    pool: Arc<PgPool>,
}

impl PgShortUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn unavailable(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Unavailable(e.to_string())
}

#[async_trait]
impl ShortUrlRepository for PgShortUrlRepository {
    async fn create(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, RepositoryError> {
        let sql = format!(
            "INSERT INTO short_urls (short_code, original_url, shortened_url) \
             VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );

        let row = sqlx::query_as::<_, ShortUrlRow>(&sql)
            .bind(&new_short_url.short_code)
            .bind(&new_short_url.original_url)
            .bind(&new_short_url.shortened_url)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| map_sqlx_error(e, &new_short_url.short_code))?;

        Ok(row.into())
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortUrl>, RepositoryError> {
        let sql = format!("SELECT {COLUMNS} FROM short_urls WHERE short_code = $1");

        let row = sqlx::query_as::<_, ShortUrlRow>(&sql)
            .bind(short_code)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(unavailable)?;

        Ok(row.map(ShortUrl::from))
    }

    async fn exists_by_code(&self, short_code: &str) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM short_urls WHERE short_code = $1)",
        )
        .bind(short_code)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(unavailable)
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, RepositoryError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM short_urls WHERE original_url = $1 ORDER BY id LIMIT 1"
        );

        let row = sqlx::query_as::<_, ShortUrlRow>(&sql)
            .bind(original_url)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(unavailable)?;

        Ok(row.map(ShortUrl::from))
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(unavailable)?;
        Ok(())
    }
}
