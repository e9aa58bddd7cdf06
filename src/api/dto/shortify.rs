//! DTOs for the creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::Shortened;

/// Request to shorten a single URL.
///
/// Only presence and length are checked here; absolute-URL and scheme rules are
/// enforced by the registry so every entry point applies them.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortifyRequest {
    #[validate(length(min = 1, max = 2048))]
    pub original_url: String,
}

#[derive(Debug, Serialize)]
pub struct ShortifyResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
}

impl From<Shortened> for ShortifyResponse {
    fn from(shortened: Shortened) -> Self {
        Self {
            short_code: shortened.record.short_code,
            short_url: shortened.record.shortened_url,
            original_url: shortened.record.original_url,
        }
    }
}
