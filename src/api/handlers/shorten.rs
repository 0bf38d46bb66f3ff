//! Handler for the shorten endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::JsonOrForm;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short identifier for a submitted URL.
///
/// # Endpoint
///
/// `POST /api/shorturl` with a JSON or form body carrying a `url` field.
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.example.com", "short_url": 1 }
/// ```
///
/// Resubmitting a known URL returns the identifier assigned on first
/// submission. Failures use the body-level error contract: HTTP 200 with
/// `{"error": "Invalid URL"}` for validation failures, a generic message
/// for store failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let link = state.link_service.shorten(payload.url()).await?;

    Ok(Json(ShortenResponse {
        original_url: link.original_url,
        short_url: link.short_id,
    }))
}
