//! Handler for short identifier resolution.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_id}` where the path parameter must be a
/// base-10 integer string.
///
/// # Responses
///
/// - Found: HTTP 302 with `Location` set to the stored original URL
/// - Non-numeric parameter: body-level error describing the format
/// - Unknown identifier: body-level not-found error
///
/// Both error cases keep the always-200 contract; the redirect is the only
/// path that uses a non-200 status.
pub async fn resolve_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let short_id: i64 = raw_id.parse().map_err(|_| AppError::MalformedId)?;

    let link = state.link_service.resolve(short_id).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, link.original_url)]).into_response())
}
