//! Cache service trait and error types.

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

use crate::domain::entities::CachedShortUrl;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
    SerializationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
            Self::SerializationError(e) => write!(f, "Cache serialization error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Volatile key/value cache of short code mappings.
///
/// Implementations report failures honestly; callers decide how to degrade. The
/// registry treats a failed read as a miss and a failed write as a no-op, so a
/// cache outage only costs latency.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process moka cache with per-entry TTL
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the cached mapping for a short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(entry))` on cache hit
    /// - `Ok(None)` on cache miss or expired entry
    async fn get(&self, short_code: &str) -> CacheResult<Option<CachedShortUrl>>;

    /// Stores a mapping that expires `ttl` after the write.
    ///
    /// Overwrites any existing entry; concurrent writers race and the last write wins.
    async fn set(&self, short_code: &str, entry: &CachedShortUrl, ttl: Duration)
    -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;
}
