//! Path identifier extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Single `{id}` path segment, guaranteed non-blank.
///
/// Only presence is checked here; the segment is passed through as sent
/// and each domain parses it into its own key type.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::PathId;
///
/// async fn get_item(PathId(id): PathId) -> String {
///     format!("Item ID: {}", id)
/// }
///
/// let app = Router::new().route("/items/list/{id}", get(get_item));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathId(pub String);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::MissingParameter(e.body_text()).into_response())?;

        if id.trim().is_empty() {
            return Err(AppError::MissingParameter("no id provided".to_string()).into_response());
        }

        Ok(PathId(id))
    }
}
