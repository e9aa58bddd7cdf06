//! In-process cache backed by moka.

use super::service::{CacheResult, CacheService};
use crate::domain::entities::CachedShortUrl;
use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default maximum number of cached short codes.
pub const DEFAULT_CAPACITY: u64 = 10_000;

#[derive(Debug, Clone)]
struct Entry {
    value: CachedShortUrl,
    ttl: Duration,
}

/// Expires each entry after the TTL it was written with.
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// Single-node cache used when Redis is not configured.
///
/// Entries are bounded by capacity and expire after the TTL passed to
/// [`CacheService::set`]. Expired entries are never returned, even before eviction.
#[derive(Clone)]
pub struct MemoryCache {
    cache: Cache<String, Entry>,
}

impl MemoryCache {
    /// Creates a cache holding at most [`DEFAULT_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryTtl)
            .build();
        Self { cache }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, short_code: &str) -> CacheResult<Option<CachedShortUrl>> {
        match self.cache.get(short_code).await {
            Some(entry) => {
                debug!("Cache HIT: {}", short_code);
                Ok(Some(entry.value))
            }
            None => {
                debug!("Cache MISS: {}", short_code);
                Ok(None)
            }
        }
    }

    async fn set(
        &self,
        short_code: &str,
        entry: &CachedShortUrl,
        ttl: Duration,
    ) -> CacheResult<()> {
        self.cache
            .insert(
                short_code.to_string(),
                Entry {
                    value: entry.clone(),
                    ttl,
                },
            )
            .await;
        debug!("Cache SET: {} (TTL: {}s)", short_code, ttl.as_secs());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
