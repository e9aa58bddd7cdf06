//! DTOs for the resolution endpoint.

use serde::Serialize;

use crate::application::services::ResolvedUrl;

#[derive(Debug, Serialize)]
pub struct UnshortifyResponse {
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
}

impl From<ResolvedUrl> for UnshortifyResponse {
    fn from(resolved: ResolvedUrl) -> Self {
        Self {
            original_url: resolved.original_url,
            short_code: resolved.short_code,
            short_url: resolved.shortened_url,
        }
    }
}
