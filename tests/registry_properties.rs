mod common;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use shortify::application::services::{CreateOutcome, RegistrySettings, UrlRegistry};
use shortify::domain::errors::ShortifyError;
use shortify::infrastructure::cache::{MemoryCache, NullCache};
use shortify::infrastructure::persistence::InMemoryShortUrlRepository;

fn registry_over_memory() -> UrlRegistry {
    UrlRegistry::new(
        Arc::new(InMemoryShortUrlRepository::new()),
        Arc::new(MemoryCache::new()),
        common::test_settings(),
    )
}

#[tokio::test]
async fn test_distinct_urls_get_distinct_codes() {
    let registry = registry_over_memory();
    let mut codes = HashSet::new();

    for i in 0..500 {
        let shortened = registry
            .create(&format!("https://example.com/page/{i}"))
            .await
            .unwrap();
        assert_eq!(shortened.outcome, CreateOutcome::Created);
        codes.insert(shortened.record.short_code);
    }

    assert_eq!(codes.len(), 500);
}

#[tokio::test]
async fn test_repeat_creation_returns_same_record() {
    let registry = registry_over_memory();

    let first = registry.create("https://example.com/a").await.unwrap();
    let second = registry.create("https://example.com/a").await.unwrap();

    assert_eq!(first.outcome, CreateOutcome::Created);
    assert_eq!(second.outcome, CreateOutcome::Existing);
    assert_eq!(first.record, second.record);
}

#[tokio::test]
async fn test_resolve_after_create_is_served_from_cache() {
    let repository = Arc::new(common::CountingRepository::new());
    let registry = UrlRegistry::new(
        repository.clone(),
        Arc::new(MemoryCache::new()),
        common::test_settings(),
    );

    let shortened = registry.create("https://example.com").await.unwrap();

    for _ in 0..3 {
        let resolved = registry.resolve(&shortened.record.short_code).await.unwrap();
        assert_eq!(resolved.original_url, "https://example.com");
    }

    assert_eq!(repository.code_lookups(), 0);
}

#[tokio::test]
async fn test_cache_miss_reads_store_once_then_hits() {
    let repository = Arc::new(common::CountingRepository::new());

    // Populate the store through a registry whose cache remembers nothing.
    let writer = UrlRegistry::new(
        repository.clone(),
        Arc::new(NullCache::new()),
        common::test_settings(),
    );
    let code = writer
        .create("https://example.com")
        .await
        .unwrap()
        .record
        .short_code;

    let reader = UrlRegistry::new(
        repository.clone(),
        Arc::new(MemoryCache::new()),
        common::test_settings(),
    );

    reader.resolve(&code).await.unwrap();
    reader.resolve(&code).await.unwrap();
    reader.resolve(&code).await.unwrap();

    assert_eq!(repository.code_lookups(), 1);
}

#[tokio::test]
async fn test_expired_cache_entry_falls_back_to_store() {
    let repository = Arc::new(common::CountingRepository::new());
    let settings = RegistrySettings {
        cache_ttl: Duration::from_millis(50),
        ..common::test_settings()
    };
    let registry = UrlRegistry::new(repository.clone(), Arc::new(MemoryCache::new()), settings);

    let code = registry
        .create("https://example.com")
        .await
        .unwrap()
        .record
        .short_code;

    tokio::time::sleep(Duration::from_millis(200)).await;

    let resolved = registry.resolve(&code).await.unwrap();
    assert_eq!(resolved.original_url, "https://example.com");
    assert_eq!(repository.code_lookups(), 1);
}

#[tokio::test]
async fn test_unknown_code_is_not_found() {
    let registry = registry_over_memory();

    let err = registry.resolve("zzzzzz").await.unwrap_err();

    assert!(matches!(err, ShortifyError::NotFound { short_code } if short_code == "zzzzzz"));
}

#[tokio::test]
async fn test_custom_code_length() {
    let settings = RegistrySettings {
        code_length: 8,
        ..common::test_settings()
    };
    let registry = UrlRegistry::new(
        Arc::new(InMemoryShortUrlRepository::new()),
        Arc::new(MemoryCache::new()),
        settings,
    );

    let shortened = registry.create("https://example.com").await.unwrap();

    assert_eq!(shortened.record.short_code.len(), 8);
    assert_eq!(
        shortened.record.shortened_url,
        format!("https://short.fy/{}", shortened.record.short_code)
    );
}

#[tokio::test]
async fn test_concurrent_creates_for_distinct_urls() {
    let registry = Arc::new(registry_over_memory());
    let mut handles = vec![];

    for i in 0..32 {
        let registry = Arc::clone(&registry);
        handles.push(tokio::spawn(async move {
            registry
                .create(&format!("https://example.com/{i}"))
                .await
                .unwrap()
                .record
                .short_code
        }));
    }

    let mut codes = HashSet::new();
    for handle in handles {
        codes.insert(handle.await.unwrap());
    }

    assert_eq!(codes.len(), 32);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_for_same_url_settle_on_one_code() {
    let registry = Arc::new(registry_over_memory());
    let url = "https://example.com/contended";
    let mut handles = vec![];

    for _ in 0..16 {
        let registry = Arc::clone(&registry);
        handles.push(tokio::spawn(async move {
            registry.create(url).await.unwrap().record.short_code
        }));
    }

    let mut racing_codes = HashSet::new();
    for handle in handles {
        racing_codes.insert(handle.await.unwrap());
    }

    // Every code handed out during the race must still resolve to the URL.
    for code in &racing_codes {
        let resolved = registry.resolve(code).await.unwrap();
        assert_eq!(resolved.original_url, url);
    }

    let settled = registry.create(url).await.unwrap();
    assert_eq!(settled.outcome, CreateOutcome::Existing);
    assert!(racing_codes.contains(&settled.record.short_code));

    for _ in 0..5 {
        let again = registry.create(url).await.unwrap();
        assert_eq!(again.outcome, CreateOutcome::Existing);
        assert_eq!(again.record.short_code, settled.record.short_code);
    }
}
