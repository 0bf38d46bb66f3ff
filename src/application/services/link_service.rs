//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::{LinkRepository, SequenceRepository};
use crate::domain::resolver::HostResolver;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_url;
use crate::utils::url_validator::parse_url;

/// Service orchestrating the shorten and resolve flows.
///
/// Shortening runs validate → dedupe → allocate → insert. Repeated
/// submissions of the same URL return the same record; the unique
/// constraint on `original_url` closes the window where two concurrent
/// requests for the same new URL both miss the dedupe check.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    sequence: Arc<dyn SequenceRepository>,
    resolver: Arc<dyn HostResolver>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        links: Arc<dyn LinkRepository>,
        sequence: Arc<dyn SequenceRepository>,
        resolver: Arc<dyn HostResolver>,
    ) -> Self {
        Self {
            links,
            sequence,
            resolver,
        }
    }

    /// Shortens a URL, returning the existing record when one is present.
    ///
    /// The input is stored exactly as submitted. Validation requires an
    /// http(s) URL whose hostname resolves; a resolver failure is a
    /// validation failure, not an internal error, and is never retried
    /// within the request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the input fails shape or
    /// resolution checks. Returns [`AppError::Store`] on database errors.
    pub async fn shorten(&self, raw_url: &str) -> Result<Link, AppError> {
        let parsed = parse_url(raw_url).map_err(|e| {
            tracing::debug!(error = %e, "rejected submission");
            AppError::InvalidUrl
        })?;

        if !self.resolver.resolves(&parsed.host).await {
            return Err(AppError::InvalidUrl);
        }

        if let Some(existing) = self.links.find_by_url(raw_url).await? {
            return Ok(existing);
        }

        let short_id = self.sequence.next_id().await?;

        match self.links.insert(raw_url, short_id).await {
            Ok(link) => {
                tracing::info!(short_id, "created short link");
                Ok(link)
            }
            // Lost the race against a concurrent insert of the same URL;
            // the winner's record is the canonical one. The allocated id
            // goes unused, which the allocator contract permits. Only the
            // original_url constraint qualifies: a short_id collision is
            // store corruption, not a race, and must not be recovered.
            Err(e) if is_unique_violation_on_url(&e) => self
                .links
                .find_by_url(raw_url)
                .await?
                .ok_or(AppError::Store(sqlx::Error::RowNotFound)),
            Err(e) => Err(e),
        }
    }

    /// Resolves a short identifier to its stored link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn resolve(&self, short_id: i64) -> Result<Link, AppError> {
        self.links
            .find_by_short_id(short_id)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Connectivity probe for the health endpoint.
    pub async fn store_healthy(&self) -> bool {
        self.links.ping().await
    }
}
