//! Short URL creation and cache-aside resolution.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use super::code_allocator::CodeAllocator;
use crate::domain::entities::{CachedShortUrl, NewShortUrl, ShortUrl};
use crate::domain::errors::{RepositoryError, ShortifyError};
use crate::domain::repositories::ShortUrlRepository;
use crate::infrastructure::cache::CacheService;
use crate::utils::url_validator::validate_original_url;

/// Immutable registry settings, built once from validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySettings {
    /// Public base URL that short codes are appended to.
    pub base_url: String,
    pub cache_ttl: Duration,
    pub code_length: usize,
    pub max_attempts: u32,
}

/// Whether [`UrlRegistry::create`] inserted a record or found an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    Existing,
}

/// Result of a successful creation request.
#[derive(Debug, Clone)]
pub struct Shortened {
    pub record: ShortUrl,
    pub outcome: CreateOutcome,
}

/// Result of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl {
    pub original_url: String,
    pub short_code: String,
    pub shortened_url: String,
}

impl ResolvedUrl {
    fn from_cached(short_code: &str, cached: CachedShortUrl) -> Self {
        Self {
            original_url: cached.original_url,
            short_code: short_code.to_string(),
            shortened_url: cached.shortened_url,
        }
    }
}

impl From<ShortUrl> for ResolvedUrl {
    fn from(record: ShortUrl) -> Self {
        Self {
            original_url: record.original_url,
            short_code: record.short_code,
            shortened_url: record.shortened_url,
        }
    }
}

/// Orchestrates idempotent creation and cache-aside resolution.
///
/// The durable store is the source of truth. The cache is best-effort: a failed
/// read counts as a miss and a failed write is logged and ignored.
///
/// Requests share no state beyond the store and cache, so concurrent calls need no
/// coordination. Two concurrent creates for the same URL may both insert; the
/// store's code uniqueness constraint is the only cross-request guarantee.
pub struct UrlRegistry {
    repository: Arc<dyn ShortUrlRepository>,
    cache: Arc<dyn CacheService>,
    allocator: CodeAllocator,
    base_url: String,
    cache_ttl: Duration,
}

impl UrlRegistry {
    pub fn new(
        repository: Arc<dyn ShortUrlRepository>,
        cache: Arc<dyn CacheService>,
        settings: RegistrySettings,
    ) -> Self {
        Self {
            repository,
            cache,
            allocator: CodeAllocator::new(settings.code_length, settings.max_attempts),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            cache_ttl: settings.cache_ttl,
        }
    }

    /// Returns the short URL for an existing record, or allocates and stores a new one.
    ///
    /// # Errors
    ///
    /// - [`ShortifyError::InvalidUrl`] if `original_url` is not an absolute HTTP(S) URL
    /// - [`ShortifyError::CodeGenerationFailed`] if no free code was found within the
    ///   attempt bound; nothing is written in that case
    /// - [`ShortifyError::StoreUnavailable`] on durable store failures
    pub async fn create(&self, original_url: &str) -> Result<Shortened, ShortifyError> {
        if let Err(rejection) = validate_original_url(original_url) {
            warn!("Rejected URL {}: {}", original_url, rejection);
            return Err(ShortifyError::InvalidUrl(rejection));
        }

        if let Some(existing) = self.repository.find_by_original_url(original_url).await? {
            info!("URL already exists with short code: {}", existing.short_code);
            return Ok(Shortened {
                record: existing,
                outcome: CreateOutcome::Existing,
            });
        }

        let record = self.insert_with_fresh_code(original_url).await?;

        self.populate_cache(&record.short_code, CachedShortUrl::from(&record))
            .await;

        info!("Created short URL: {} -> {}", record.short_code, original_url);

        Ok(Shortened {
            record,
            outcome: CreateOutcome::Created,
        })
    }

    /// Resolves a short code, reading through the cache.
    ///
    /// A cache hit never touches the durable store. A miss reads the store and
    /// repopulates the cache with the configured TTL.
    ///
    /// # Errors
    ///
    /// - [`ShortifyError::NotFound`] if no record has this code
    /// - [`ShortifyError::StoreUnavailable`] on durable store failures
    pub async fn resolve(&self, short_code: &str) -> Result<ResolvedUrl, ShortifyError> {
        match self.cache.get(short_code).await {
            Ok(Some(cached)) => {
                debug!("Resolved {} from cache", short_code);
                return Ok(ResolvedUrl::from_cached(short_code, cached));
            }
            Ok(None) => debug!("Cache miss for short code: {}", short_code),
            Err(e) => warn!("Cache read failed for {}, using store: {}", short_code, e),
        }

        let Some(record) = self.repository.find_by_code(short_code).await? else {
            warn!("Short code not found: {}", short_code);
            return Err(ShortifyError::NotFound {
                short_code: short_code.to_string(),
            });
        };

        self.populate_cache(short_code, CachedShortUrl::from(&record))
            .await;

        info!("Resolved short code: {} -> {}", short_code, record.original_url);

        Ok(record.into())
    }

    /// Builds `base + "/" + short_code`.
    pub fn shortened_url(&self, short_code: &str) -> String {
        format!("{}/{}", self.base_url, short_code)
    }

    /// Allocates a code and inserts the record.
    ///
    /// A uniqueness violation on insert means another request claimed the code
    /// between the existence check and the insert; it is retried with a fresh code.
    /// Every candidate, checked or inserted, counts against one `max_attempts` budget.
    async fn insert_with_fresh_code(&self, original_url: &str) -> Result<ShortUrl, ShortifyError> {
        let max_attempts = self.allocator.max_attempts();
        let mut remaining = max_attempts;

        while remaining > 0 {
            let repository = Arc::clone(&self.repository);
            let allocation = self
                .allocator
                .allocate_within(remaining, move |candidate| {
                    let repository = Arc::clone(&repository);
                    async move {
                        repository
                            .exists_by_code(&candidate)
                            .await
                            .map_err(ShortifyError::from)
                    }
                })
                .await;

            let allocation = match allocation {
                Ok(allocation) => allocation,
                Err(ShortifyError::CodeGenerationFailed { .. }) => break,
                Err(e) => return Err(e),
            };
            remaining -= allocation.attempts;

            let new_short_url = NewShortUrl {
                shortened_url: self.shortened_url(&allocation.code),
                short_code: allocation.code,
                original_url: original_url.to_string(),
            };

            match self.repository.create(new_short_url).await {
                Ok(record) => return Ok(record),
                Err(RepositoryError::CodeConflict(code)) => {
                    debug!(
                        "Insert collided on short code: {}, {} attempts left",
                        code, remaining
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        error!(
            "Failed to generate unique short code after {} attempts",
            max_attempts
        );
        Err(ShortifyError::CodeGenerationFailed {
            attempts: max_attempts,
        })
    }

    async fn populate_cache(&self, short_code: &str, entry: CachedShortUrl) {
        if let Err(e) = self.cache.set(short_code, &entry, self.cache_ttl).await {
            warn!("Failed to cache short code {}: {}", short_code, e);
        }
    }
}
