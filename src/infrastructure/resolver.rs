//! DNS-backed hostname resolution via the system resolver.

use async_trait::async_trait;
use tokio::net::lookup_host;

use crate::domain::resolver::HostResolver;

/// Resolves hostnames through `tokio::net::lookup_host`.
///
/// The port is irrelevant to name resolution but required by the lookup
/// API; 80 is used as a placeholder.
pub struct DnsHostResolver;

impl DnsHostResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DnsHostResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostResolver for DnsHostResolver {
    async fn resolves(&self, host: &str) -> bool {
        match lookup_host((host, 80)).await {
            Ok(mut addrs) => addrs.next().is_some(),
            Err(e) => {
                tracing::debug!(host, error = %e, "hostname did not resolve");
                false
            }
        }
    }
}
