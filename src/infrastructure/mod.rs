//! Adapters for the durable store and the volatile cache.
//!
//! Implements the traits declared in [`crate::domain::repositories`] and
//! [`cache::CacheService`].
//!
//! - [`cache`] - Redis, in-process moka and no-op caches
//! - [`persistence`] - PostgreSQL and in-memory short URL stores

pub mod cache;
pub mod persistence;
