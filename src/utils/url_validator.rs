//! URL shape validation.
//!
//! The shape check is the pure half of the validation pipeline; hostname
//! resolution happens separately through
//! [`crate::domain::resolver::HostResolver`]. The input string is never
//! rewritten: what the client submitted is what gets stored.

use url::Url;

/// Errors that can occur during URL shape validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no hostname")]
    MissingHost,
}

/// A validated URL paired with the hostname extracted from it.
///
/// The hostname is used only for resolution; it is not persisted.
#[derive(Debug, Clone)]
pub struct ParsedUrl {
    pub original: String,
    pub host: String,
}

/// Checks that the input has the shape of a resolvable URL.
///
/// # Rules
///
/// 1. Must parse as an absolute URL
/// 2. Scheme must be `http` or `https` (rejects `javascript:`, `data:`,
///    `file:` and friends)
/// 3. Must carry a non-empty hostname
///
/// The returned [`ParsedUrl::original`] is the unmodified input.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed input.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`UrlValidationError::MissingHost`] when no hostname is present.
pub fn parse_url(input: &str) -> Result<ParsedUrl, UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or(UrlValidationError::MissingHost)?;

    Ok(ParsedUrl {
        original: input.to_string(),
        host: host.to_string(),
    })
}
