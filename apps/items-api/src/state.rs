//! Application state management.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloned into each router; the MongoDB client is a handle onto a shared
/// connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    pub mongo_client: Client,
    pub db: Database,
}
