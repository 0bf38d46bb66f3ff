//! Rate limiting middleware using a per-IP token bucket.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates a rate limiter for the API endpoints.
///
/// Requests exceeding the limit receive a textual `429 Too Many Requests`
/// rejection before reaching the handlers. The handlers validate
/// defensively regardless, so the limiter stays a pluggable policy rather
/// than a correctness dependency.
///
/// # Key Extraction
///
/// Limits apply per client IP taken from the socket peer address.
pub fn layer(
    per_second: u64,
    burst: u32,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst)
            .finish()
            .expect("rate limit settings are validated at startup"),
    );

    GovernorLayer::new(governor_conf)
}
