//! Validation of URLs submitted for shortening.
//!
//! The submitted string is stored verbatim; validation only decides whether it
//! is acceptable. Idempotency relies on exact string matches, so no
//! normalization is applied.

use url::Url;

use crate::domain::errors::UrlRejection;

/// Maximum accepted length of an original URL, in characters.
pub const MAX_URL_LENGTH: usize = 2048;

/// Checks that `input` is an absolute HTTP(S) URL of bounded length.
///
/// # Errors
///
/// - [`UrlRejection::TooLong`] if the input exceeds [`MAX_URL_LENGTH`] characters
/// - [`UrlRejection::Malformed`] if it does not parse as an absolute URL
/// - [`UrlRejection::InvalidScheme`] if it parses but the scheme is not `http`/`https`
///
/// # Examples
///
/// ```ignore
/// assert!(validate_original_url("https://example.com/a").is_ok());
/// assert_eq!(validate_original_url("not-a-url"), Err(UrlRejection::Malformed));
/// assert_eq!(validate_original_url("ftp://x.com/a"), Err(UrlRejection::InvalidScheme));
/// ```
pub fn validate_original_url(input: &str) -> Result<Url, UrlRejection> {
    if input.chars().count() > MAX_URL_LENGTH {
        return Err(UrlRejection::TooLong {
            max: MAX_URL_LENGTH,
        });
    }

    let url = Url::parse(input).map_err(|_| UrlRejection::Malformed)?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(UrlRejection::InvalidScheme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https() {
        assert!(validate_original_url("https://example.com/a").is_ok());
    }

    #[test]
    fn test_accepts_http_with_query() {
        assert!(validate_original_url("http://example.com/search?q=rust&page=2").is_ok());
    }

    #[test]
    fn test_rejects_relative() {
        assert_eq!(
            validate_original_url("not-a-url").unwrap_err(),
            UrlRejection::Malformed
        );
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_original_url("").unwrap_err(), UrlRejection::Malformed);
    }

    #[test]
    fn test_rejects_missing_host() {
        assert_eq!(
            validate_original_url("https://").unwrap_err(),
            UrlRejection::Malformed
        );
    }

    #[test]
    fn test_rejects_ftp_scheme() {
        assert_eq!(
            validate_original_url("ftp://x.com/a").unwrap_err(),
            UrlRejection::InvalidScheme
        );
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        for input in ["javascript:alert(1)", "data:text/plain,hi", "file:///etc/passwd"] {
            assert_eq!(
                validate_original_url(input).unwrap_err(),
                UrlRejection::InvalidScheme,
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_length_boundary() {
        let prefix = "https://example.com/";
        let at_limit = format!("{prefix}{}", "a".repeat(MAX_URL_LENGTH - prefix.len()));
        assert!(validate_original_url(&at_limit).is_ok());

        let over = format!("{at_limit}a");
        assert_eq!(
            validate_original_url(&over).unwrap_err(),
            UrlRejection::TooLong {
                max: MAX_URL_LENGTH
            }
        );
    }
}
