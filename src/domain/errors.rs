//! Domain error taxonomy.
//!
//! [`ShortifyError`] is the only error type returned by the registry. Each variant
//! maps to exactly one transport outcome (see [`crate::error::AppError`]).

use thiserror::Error;

/// Reason a URL was refused by the creation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UrlRejection {
    #[error("The provided URL is not a valid absolute URL")]
    Malformed,

    #[error("Only HTTP and HTTPS URLs are supported")]
    InvalidScheme,

    #[error("URL must not exceed {max} characters")]
    TooLong { max: usize },
}

/// Errors surfaced by the allocation and resolution protocol.
#[derive(Debug, Error)]
pub enum ShortifyError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(UrlRejection),

    #[error("Unable to generate a unique short code after {attempts} attempts")]
    CodeGenerationFailed { attempts: u32 },

    #[error("No URL found for short code '{short_code}'")]
    NotFound { short_code: String },

    #[error("Durable store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Errors reported by a [`crate::domain::repositories::ShortUrlRepository`].
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The insert hit the uniqueness constraint on `short_code`.
    #[error("Short code '{0}' is already taken")]
    CodeConflict(String),

    #[error("Store error: {0}")]
    Unavailable(String),
}

impl From<RepositoryError> for ShortifyError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Unavailable(message) => ShortifyError::StoreUnavailable(message),
            conflict @ RepositoryError::CodeConflict(_) => {
                ShortifyError::StoreUnavailable(conflict.to_string())
            }
        }
    }
}
