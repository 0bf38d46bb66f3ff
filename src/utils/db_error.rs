use crate::error::AppError;

/// True when the error is the unique violation on `links.original_url`.
///
/// This is the only conflict the create flow may recover from: it means a
/// concurrent request inserted the same URL first and the winner's record
/// is canonical. Any other constraint (notably the `short_id` primary
/// key) signals a store inconsistency and must surface as a failure.
pub fn is_unique_violation_on_url(e: &AppError) -> bool {
    matches!(e, AppError::Conflict { constraint: Some(c) } if c == "links_original_url_key")
}
