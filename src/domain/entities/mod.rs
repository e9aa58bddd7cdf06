//! Core domain entities.
//!
//! - [`ShortUrl`] - the durable short URL record
//! - [`NewShortUrl`] - insert payload (id and timestamp are store-assigned)
//! - [`CachedShortUrl`] - the value kept in the volatile cache

pub mod short_url;

pub use short_url::{CachedShortUrl, NewShortUrl, ShortUrl};
