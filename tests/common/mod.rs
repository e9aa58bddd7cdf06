#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use shortify::application::services::RegistrySettings;
use shortify::domain::entities::{CachedShortUrl, NewShortUrl, ShortUrl};
use shortify::domain::errors::RepositoryError;
use shortify::domain::repositories::ShortUrlRepository;
use shortify::infrastructure::cache::{CacheError, CacheResult, CacheService, MemoryCache};
use shortify::infrastructure::persistence::InMemoryShortUrlRepository;
use shortify::state::AppState;

pub const BASE_URL: &str = "https://short.fy";

pub fn test_settings() -> RegistrySettings {
    RegistrySettings {
        base_url: BASE_URL.to_string(),
        cache_ttl: Duration::from_secs(60 * 60),
        code_length: 6,
        max_attempts: 10,
    }
}

/// State over the in-memory store and in-process cache.
pub fn create_test_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryShortUrlRepository::new()),
        Arc::new(MemoryCache::new()),
        test_settings(),
    )
}

pub fn create_test_state_with(
    repository: Arc<dyn ShortUrlRepository>,
    cache: Arc<dyn CacheService>,
) -> AppState {
    AppState::new(repository, cache, test_settings())
}

/// Wraps a repository and counts reads by short code.
pub struct CountingRepository {
    inner: InMemoryShortUrlRepository,
    code_lookups: AtomicUsize,
}

impl CountingRepository {
    pub fn new() -> Self {
        Self {
            inner: InMemoryShortUrlRepository::new(),
            code_lookups: AtomicUsize::new(0),
        }
    }

    pub fn code_lookups(&self) -> usize {
        self.code_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ShortUrlRepository for CountingRepository {
    async fn create(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, RepositoryError> {
        self.inner.create(new_short_url).await
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortUrl>, RepositoryError> {
        self.code_lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_code(short_code).await
    }

    async fn exists_by_code(&self, short_code: &str) -> Result<bool, RepositoryError> {
        self.inner.exists_by_code(short_code).await
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, RepositoryError> {
        self.inner.find_by_original_url(original_url).await
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.inner.ping().await
    }
}

/// Store whose every operation fails, as if the database were down.
pub struct UnavailableRepository;

#[async_trait]
impl ShortUrlRepository for UnavailableRepository {
    async fn create(&self, _new_short_url: NewShortUrl) -> Result<ShortUrl, RepositoryError> {
        Err(unavailable())
    }

    async fn find_by_code(&self, _short_code: &str) -> Result<Option<ShortUrl>, RepositoryError> {
        Err(unavailable())
    }

    async fn exists_by_code(&self, _short_code: &str) -> Result<bool, RepositoryError> {
        Err(unavailable())
    }

    async fn find_by_original_url(
        &self,
        _original_url: &str,
    ) -> Result<Option<ShortUrl>, RepositoryError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Err(unavailable())
    }
}

fn unavailable() -> RepositoryError {
    RepositoryError::Unavailable("connection refused".to_string())
}

/// Cache whose every operation fails, as if Redis were unreachable.
pub struct UnreachableCache;

#[async_trait]
impl CacheService for UnreachableCache {
    async fn get(&self, _short_code: &str) -> CacheResult<Option<CachedShortUrl>> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn set(
        &self,
        _short_code: &str,
        _entry: &CachedShortUrl,
        _ttl: Duration,
    ) -> CacheResult<()> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}
