//! Request extractor accepting JSON or urlencoded form bodies.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Deserializes the request body as JSON when the `Content-Type` says so,
/// and as an urlencoded form otherwise.
///
/// Any deserialization failure is reported through the body-level error
/// contract rather than a transport-level rejection status: a client that
/// sends garbage gets the same `{"error": "Invalid URL"}` as one that
/// sends a well-formed body with a bad URL.
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        if is_json {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|_| AppError::InvalidUrl)?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|_| AppError::InvalidUrl)?;
            Ok(Self(value))
        }
    }
}
