//! HTTP middleware module.
//!
//! - Security headers on every response
//! - JSON content type for API routes
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{json_content_type, security_headers};
//!
//! let api = Router::new()
//!     .route("/items/list", get(list))
//!     .layer(axum::middleware::from_fn(json_content_type));
//! let app = Router::new()
//!     .merge(api)
//!     .layer(axum::middleware::from_fn(security_headers));
//! ```

pub mod content_type;
pub mod security;

pub use content_type::json_content_type;
pub use security::security_headers;
