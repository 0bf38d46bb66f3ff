//! Repository trait for short link data access.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the link store.
///
/// Both entities live behind the persistence layer; handlers and services
/// never cache or mutate them outside these operations.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its original URL. Exact string match.
    ///
    /// Used to make repeated submissions of the same URL idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_url(&self, original_url: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its short identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_short_id(&self, short_id: i64) -> Result<Option<Link>, AppError>;

    /// Inserts a new link record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the original URL was inserted
    /// concurrently (unique constraint on `original_url`), so the caller
    /// can re-fetch and return the existing record.
    ///
    /// Returns [`AppError::Store`] on other database errors.
    async fn insert(&self, original_url: &str, short_id: i64) -> Result<Link, AppError>;

    /// Connectivity probe for the health endpoint.
    async fn ping(&self) -> bool;
}
