//! Items API routes

use axum::Router;
use domain_items::{ItemService, MongoItemRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository =
        MongoItemRepository::with_collection(state.db.clone(), &state.config.items.collection);

    let service = ItemService::new(repository).with_timeout(state.config.items.request_timeout);

    handlers::router(service)
}
