//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/shorturl`.
///
/// Accepted as JSON or urlencoded form data. A missing `url` field is not
/// a deserialization error; it flows into validation as an empty string
/// and comes back as `{"error": "Invalid URL"}`.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: Option<String>,
}

impl ShortenRequest {
    /// The submitted URL, or an empty string when the field was absent.
    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }
}

/// Successful response for `POST /api/shorturl`.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: i64,
}
