//! Hostname resolution boundary used by the validation pipeline.

use async_trait::async_trait;

/// Name-to-address lookup for validating submitted hostnames.
///
/// A lookup failure is a normal negative result, not an error: the
/// validation pipeline treats transient resolver trouble the same as a
/// nonexistent domain and the client may simply resubmit.
///
/// # Implementations
///
/// - [`crate::infrastructure::resolver::DnsHostResolver`] - system resolver via tokio
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Returns true if the hostname resolves to at least one address.
    async fn resolves(&self, host: &str) -> bool;
}
