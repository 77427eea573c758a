use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Invalid item id '{0}': expected a 24-character hex string")]
    InvalidId(String),

    #[error("Item {0} not found")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("{0} timed out")]
    Timeout(&'static str),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::InvalidId(_) => AppError::InvalidId(err.to_string()),
            ItemError::NotFound(_) => AppError::NotFound(err.to_string()),
            ItemError::Validation(msg) => AppError::BadRequest(msg),
            ItemError::Database(msg) => AppError::Database(msg),
            ItemError::Timeout(_) => AppError::ServiceUnavailable(err.to_string()),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

impl From<mongodb::error::Error> for ItemError {
    fn from(err: mongodb::error::Error) -> Self {
        ItemError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_per_category() {
        let cases = [
            (ItemError::InvalidId("zzz".into()), StatusCode::BAD_REQUEST),
            (ItemError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (ItemError::NotFound("abc".into()), StatusCode::NOT_FOUND),
            (ItemError::Database("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ItemError::Timeout("find item"), StatusCode::SERVICE_UNAVAILABLE),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ItemError::NotFound("6553a1b2c3d4e5f6a7b8c9d0".into()).to_string(),
            "Item 6553a1b2c3d4e5f6a7b8c9d0 not found"
        );
        assert_eq!(ItemError::Timeout("list items").to_string(), "list items timed out");
    }
}
