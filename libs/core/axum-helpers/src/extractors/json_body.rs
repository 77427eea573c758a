//! Lenient JSON body extractor.

use crate::errors::{AppError, ErrorCode, error_response};
use axum::{
    body::Bytes,
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Deserializes the request body as JSON without requiring a
/// `Content-Type: application/json` header.
///
/// Syntax errors and shape mismatches are both rejected with a JSON 400.
/// Body read failures keep their own status (413 for an oversized body).
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create_many(JsonBody(items): JsonBody<Vec<CreateItem>>) -> String {
///     format!("{} items", items.len())
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| {
                let status = e.status();
                let code = if status == StatusCode::PAYLOAD_TOO_LARGE {
                    ErrorCode::PayloadTooLarge
                } else {
                    ErrorCode::BadRequest
                };
                error_response(status, e.body_text(), code)
            })?;

        let Json(data) = Json::<T>::from_bytes(&bytes)
            .map_err(|e| AppError::JsonExtractorRejection(e).into_response())?;

        Ok(JsonBody(data))
    }
}
