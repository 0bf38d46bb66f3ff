//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A mapping between an original URL and its sequential short identifier.
///
/// The original URL is stored exactly as submitted (no normalization), and
/// the short identifier is immutable once assigned. Records are never
/// updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub short_id: i64,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(short_id: i64, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            short_id,
            original_url,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(1, "https://example.com".to_string(), now);

        assert_eq!(link.short_id, 1);
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_link_preserves_url_verbatim() {
        // Dedupe is an exact string match, so the entity must not touch
        // case, trailing slashes, or fragments.
        let raw = "https://EXAMPLE.com:443/Path#frag";
        let link = Link::new(7, raw.to_string(), Utc::now());
        assert_eq!(link.original_url, raw);
    }
}
