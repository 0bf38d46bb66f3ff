//! Application error taxonomy and the body-level error contract.
//!
//! Every documented client-facing failure is returned as HTTP 200 with a
//! `{"error": string}` JSON body; the transport status only deviates for
//! the redirect itself. This is a preserved API contract, so the usual
//! status-code mapping deliberately does not apply here.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Error body shape shared by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input, missing hostname, or unresolvable hostname.
    #[error("Invalid URL")]
    InvalidUrl,

    /// Non-numeric short-id path parameter.
    #[error("Short URL must be a base-10 integer")]
    MalformedId,

    /// Well-formed identifier with no matching record.
    #[error("No short URL found for the given input")]
    NotFound,

    /// Unique constraint violation on insert. Never surfaced directly;
    /// the service layer treats it as "already exists" and re-fetches.
    #[error("unique constraint violation: {constraint:?}")]
    Conflict { constraint: Option<String> },

    /// Any other persistence-layer failure.
    #[error("storage failure: {0}")]
    Store(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::InvalidUrl | AppError::MalformedId | AppError::NotFound => self.to_string(),
            AppError::Conflict { .. } | AppError::Store(_) => {
                // Internal detail stays server-side.
                tracing::error!(error = %self, "request failed on persistence layer");
                "Unable to process request, please try again".to_string()
            }
        };

        (StatusCode::OK, Json(ErrorBody { error: message })).into_response()
    }
}

/// Maps a sqlx error to the application taxonomy, singling out unique
/// constraint violations so callers can recover from insert races.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::Conflict {
            constraint: db.constraint().map(str::to_owned),
        };
    }

    AppError::Store(e)
}
