//! SQLx error classification.

use crate::domain::errors::RepositoryError;

/// Name of the uniqueness constraint on `short_urls.short_code`.
pub const SHORT_CODE_CONSTRAINT: &str = "short_urls_short_code_key";

pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORT_CODE_CONSTRAINT))
}

/// Maps an SQLx error to a repository error, treating a short code uniqueness
/// violation as a conflict on `short_code`.
pub fn map_sqlx_error(e: sqlx::Error, short_code: &str) -> RepositoryError {
    if is_unique_violation_on_code(&e) {
        return RepositoryError::CodeConflict(short_code.to_string());
    }

    RepositoryError::Unavailable(e.to_string())
}
