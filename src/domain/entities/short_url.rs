//! Short URL entity and its cached projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted mapping between a short code and an original URL.
///
/// Records are immutable once inserted; `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub shortened_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        shortened_url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            shortened_url,
            created_at,
        }
    }
}

/// Input data for inserting a new short URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub short_code: String,
    pub original_url: String,
    pub shortened_url: String,
}

/// Cache value stored under a short code.
///
/// Never authoritative: it may be missing or evicted at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedShortUrl {
    pub original_url: String,
    pub shortened_url: String,
}

impl From<&ShortUrl> for CachedShortUrl {
    fn from(record: &ShortUrl) -> Self {
        Self {
            original_url: record.original_url.clone(),
            shortened_url: record.shortened_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_url_creation() {
        let now = Utc::now();
        let record = ShortUrl::new(
            1,
            "aBc1Xy".to_string(),
            "https://example.com/very/long/path".to_string(),
            "https://short.fy/aBc1Xy".to_string(),
            now,
        );

        assert_eq!(record.id, 1);
        assert_eq!(record.short_code, "aBc1Xy");
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn test_cached_projection() {
        let record = ShortUrl::new(
            7,
            "Zz9yY8".to_string(),
            "https://rust-lang.org".to_string(),
            "https://short.fy/Zz9yY8".to_string(),
            Utc::now(),
        );

        let cached = CachedShortUrl::from(&record);
        assert_eq!(cached.original_url, "https://rust-lang.org");
        assert_eq!(cached.shortened_url, "https://short.fy/Zz9yY8");
    }

    #[test]
    fn test_cached_json_shape() {
        let cached = CachedShortUrl {
            original_url: "https://example.com".to_string(),
            shortened_url: "https://short.fy/abc123".to_string(),
        };

        let json = serde_json::to_string(&cached).unwrap();
        let back: CachedShortUrl = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cached);
        assert!(json.contains("\"original_url\""));
    }
}
