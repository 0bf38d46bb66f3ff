//! Repository trait for the short identifier sequence.

use crate::error::AppError;
use async_trait::async_trait;

/// Atomic allocator for short identifiers.
///
/// The counter only increases, by exactly 1 per allocation, and no two
/// callers ever observe the same value. The increment and the fetch are a
/// single indivisible operation against the store; a failed allocation
/// must not consume a value. No in-process locking is involved, the
/// store's own atomicity primitive is the sole synchronization mechanism.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SequenceRepository: Send + Sync {
    /// Increments the counter and returns the new value.
    ///
    /// Upsert semantics: a missing counter row is created as part of the
    /// same operation, so the first allocation yields 1.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn next_id(&self) -> Result<i64, AppError>;
}
