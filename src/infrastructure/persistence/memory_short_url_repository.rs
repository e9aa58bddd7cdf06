//! In-memory implementation of the short URL repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::errors::RepositoryError;
use crate::domain::repositories::ShortUrlRepository;

/// Process-local store used when no database is configured, and in tests.
///
/// Code uniqueness is enforced atomically through the map entry API, mirroring the
/// database constraint. The URL index remembers the first code stored for a URL, so
/// lookups by URL return the oldest record like the PostgreSQL implementation.
#[derive(Debug)]
pub struct InMemoryShortUrlRepository {
    by_code: DashMap<String, ShortUrl>,
    by_url: DashMap<String, String>,
    next_id: AtomicI64,
}

impl InMemoryShortUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            by_code: DashMap::new(),
            by_url: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

impl Default for InMemoryShortUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShortUrlRepository for InMemoryShortUrlRepository {
    async fn create(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, RepositoryError> {
        match self.by_code.entry(new_short_url.short_code.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::CodeConflict(new_short_url.short_code)),
            Entry::Vacant(slot) => {
                let record = ShortUrl::new(
                    self.next_id.fetch_add(1, Ordering::Relaxed),
                    new_short_url.short_code.clone(),
                    new_short_url.original_url.clone(),
                    new_short_url.shortened_url,
                    Utc::now(),
                );
                slot.insert(record.clone());
                self.by_url
                    .entry(new_short_url.original_url)
                    .or_insert(new_short_url.short_code);
                Ok(record)
            }
        }
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortUrl>, RepositoryError> {
        Ok(self.by_code.get(short_code).map(|r| r.value().clone()))
    }

    async fn exists_by_code(&self, short_code: &str) -> Result<bool, RepositoryError> {
        Ok(self.by_code.contains_key(short_code))
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, RepositoryError> {
        // Clone the code first so no guard on `by_url` is held while reading `by_code`.
        let Some(short_code) = self.by_url.get(original_url).map(|c| c.value().clone()) else {
            return Ok(None);
        };

        self.find_by_code(&short_code).await
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
