//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod shortify;
pub mod unshortify;

pub use health::{health_handler, liveness_handler, readiness_handler};
pub use shortify::shortify_handler;
pub use unshortify::unshortify_handler;
