//! PostgreSQL repository tests. Run with `cargo test -- --ignored` and a reachable
//! `DATABASE_URL`; `#[sqlx::test]` creates a fresh database per test and applies
//! `./migrations`.

use sqlx::PgPool;
use std::sync::Arc;

use shortify::domain::entities::NewShortUrl;
use shortify::domain::errors::RepositoryError;
use shortify::domain::repositories::ShortUrlRepository;
use shortify::infrastructure::persistence::PgShortUrlRepository;

fn new_short_url(code: &str, url: &str) -> NewShortUrl {
    NewShortUrl {
        short_code: code.to_string(),
        original_url: url.to_string(),
        shortened_url: format!("https://short.fy/{code}"),
    }
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_create_short_url(pool: PgPool) {
    let repo = PgShortUrlRepository::new(Arc::new(pool));

    let record = repo
        .create(new_short_url("abc123", "https://example.com"))
        .await
        .unwrap();

    assert!(record.id > 0);
    assert_eq!(record.short_code, "abc123");
    assert_eq!(record.original_url, "https://example.com");
    assert_eq!(record.shortened_url, "https://short.fy/abc123");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_find_by_code(pool: PgPool) {
    sqlx::query(
        "INSERT INTO short_urls (short_code, original_url, shortened_url) VALUES ($1, $2, $3)",
    )
    .bind("abc123")
    .bind("https://example.com")
    .bind("https://short.fy/abc123")
    .execute(&pool)
    .await
    .unwrap();

    let repo = PgShortUrlRepository::new(Arc::new(pool));

    let found = repo.find_by_code("abc123").await.unwrap();
    assert_eq!(found.unwrap().original_url, "https://example.com");

    assert!(repo.find_by_code("notfound").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_exists_by_code(pool: PgPool) {
    let repo = PgShortUrlRepository::new(Arc::new(pool));

    assert!(!repo.exists_by_code("abc123").await.unwrap());

    repo.create(new_short_url("abc123", "https://example.com"))
        .await
        .unwrap();

    assert!(repo.exists_by_code("abc123").await.unwrap());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_duplicate_code_is_conflict(pool: PgPool) {
    let repo = PgShortUrlRepository::new(Arc::new(pool));

    repo.create(new_short_url("abc123", "https://example.com"))
        .await
        .unwrap();

    let err = repo
        .create(new_short_url("abc123", "https://other.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::CodeConflict(ref code) if code == "abc123"));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_find_by_original_url_returns_oldest(pool: PgPool) {
    let repo = PgShortUrlRepository::new(Arc::new(pool));

    repo.create(new_short_url("first1", "https://dup.com"))
        .await
        .unwrap();
    repo.create(new_short_url("second", "https://dup.com"))
        .await
        .unwrap();

    let found = repo
        .find_by_original_url("https://dup.com")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(found.short_code, "first1");
    assert!(
        repo.find_by_original_url("https://nowhere.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_ping(pool: PgPool) {
    let repo = PgShortUrlRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_ping_after_close_is_unavailable(pool: PgPool) {
    pool.close().await;
    let repo = PgShortUrlRepository::new(Arc::new(pool));

    let err = repo.ping().await.unwrap_err();

    assert!(matches!(err, RepositoryError::Unavailable(_)));
}
