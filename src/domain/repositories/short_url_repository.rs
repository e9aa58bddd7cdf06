//! Repository trait for the durable short URL store.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::errors::RepositoryError;
use async_trait::async_trait;

/// Durable, key-indexed store of [`ShortUrl`] records.
///
/// Implementations must enforce uniqueness of `short_code` themselves (a database
/// constraint, not a prior read) and report a violation as
/// [`RepositoryError::CodeConflict`]. `original_url` is not constrained.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryShortUrlRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::CodeConflict`] if the short code is already taken.
    /// Returns [`RepositoryError::Unavailable`] on any other store failure.
    async fn create(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, RepositoryError>;

    /// Finds a record by its short code.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortUrl>, RepositoryError>;

    /// Point existence check used while allocating candidate codes.
    async fn exists_by_code(&self, short_code: &str) -> Result<bool, RepositoryError>;

    /// Finds a record by exact original URL match.
    ///
    /// If racing creates left several records for one URL, the oldest one is returned.
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, RepositoryError>;

    /// Round-trips to the store. Used by health checks.
    async fn ping(&self) -> Result<(), RepositoryError>;
}
