//! Custom extractors for Axum handlers.
//!
//! Every rejection is rendered as an [`ErrorResponse`](crate::errors::ErrorResponse)
//! so clients never see axum's plain-text rejections.

pub mod json_body;
pub mod path_id;
pub mod validated_json;

pub use json_body::JsonBody;
pub use path_id::PathId;
pub use validated_json::ValidatedJson;
