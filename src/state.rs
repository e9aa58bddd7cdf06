use std::sync::Arc;

use crate::application::services::{RegistrySettings, UrlRegistry};
use crate::domain::repositories::ShortUrlRepository;
use crate::infrastructure::cache::CacheService;

/// Shared handler state.
///
/// The repository and cache are also held directly so the health check can probe
/// them without going through the registry.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<UrlRegistry>,
    pub repository: Arc<dyn ShortUrlRepository>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn ShortUrlRepository>,
        cache: Arc<dyn CacheService>,
        settings: RegistrySettings,
    ) -> Self {
        let registry = Arc::new(UrlRegistry::new(
            Arc::clone(&repository),
            Arc::clone(&cache),
            settings,
        ));

        Self {
            registry,
            repository,
            cache,
        }
    }
}
