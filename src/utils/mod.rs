//! Utility functions shared across layers.
//!
//! - [`url_validator`] - Acceptance rules for URLs submitted for shortening
//! - [`db_error`] - SQLx error classification

pub mod db_error;
pub mod url_validator;
