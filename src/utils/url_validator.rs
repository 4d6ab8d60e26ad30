//! Destination URL validation.
//!
//! URLs are stored exactly as submitted. Validation only decides whether a
//! submission is acceptable as a redirect target, which also means it must
//! be usable verbatim as a `Location` header value.

use url::Url;

/// Reasons a destination URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is an absolute `http` or `https` URL with a host.
///
/// Only printable ASCII without spaces is accepted. The parser would
/// silently strip tabs and newlines and percent-encode the rest, leaving a
/// stored value that differs from what was checked and cannot be sent back
/// in a header. Internationalized URLs must be submitted in their encoded
/// form (punycode host, percent-encoded path).
///
/// # Errors
///
/// - [`UrlValidationError::Empty`] for an empty string
/// - [`UrlValidationError::InvalidFormat`] when the URL cannot be parsed
/// - [`UrlValidationError::UnsupportedProtocol`] for `javascript:`, `ftp:`, `data:`, ...
/// - [`UrlValidationError::MissingHost`] when no host is present
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if !input.bytes().all(|b| b.is_ascii_graphic()) {
        return Err(UrlValidationError::InvalidFormat(
            "whitespace, control or non-ASCII characters".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://example.com").is_ok());
    }

    #[test]
    fn test_accepts_path_query_and_fragment() {
        assert!(validate_url("https://example.com/a/b?q=rust&lang=en#top").is_ok());
    }

    #[test]
    fn test_accepts_ports_and_ip_hosts() {
        assert!(validate_url("http://localhost:3000/test").is_ok());
        assert!(validate_url("http://192.168.1.1:8080/api").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(validate_url(""), Err(UrlValidationError::Empty)));
    }

    #[test]
    fn test_rejects_whitespace_padding() {
        assert!(matches!(
            validate_url(" https://example.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_embedded_control_characters() {
        for input in [
            "https://example.com/a\nb",
            "https://example.com/a\tb",
            "https://exa\rmple.com",
            "https://example.com/a b",
        ] {
            assert!(
                matches!(validate_url(input), Err(UrlValidationError::InvalidFormat(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_non_ascii() {
        assert!(matches!(
            validate_url("https://exämple.com/straße"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(validate_url("https://xn--exmple-cua.com/stra%C3%9Fe").is_ok());
    }

    #[test]
    fn test_rejects_missing_scheme() {
        assert!(matches!(
            validate_url("example.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            validate_url("not a valid url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        for input in [
            "javascript:alert('xss')",
            "data:text/plain,Hello",
            "ftp://example.com/file.txt",
            "file:///etc/passwd",
            "mailto:test@example.com",
        ] {
            assert!(
                matches!(
                    validate_url(input),
                    Err(UrlValidationError::UnsupportedProtocol)
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UrlValidationError::UnsupportedProtocol.to_string(),
            "Only HTTP and HTTPS protocols are allowed"
        );
        assert_eq!(UrlValidationError::Empty.to_string(), "URL must not be empty");
    }
}
