//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating the durable store,
//! the cache and short code allocation. Services consume the repository and cache
//! traits and provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::url_registry::UrlRegistry`] - Idempotent creation and cached resolution
//! - [`services::code_allocator::CodeAllocator`] - Random base62 codes with bounded retry

pub mod services;
