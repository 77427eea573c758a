use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    routing::{delete, get, post, put},
};
use axum_helpers::{
    JsonBody, PathId, ValidatedJson,
    errors::handlers::method_not_allowed,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, ServiceUnavailableResponse,
    },
    json_content_type,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{
    CreateItem, DeleteCount, InsertedId, InsertedIds, Item, UpdateCounts, UpdateItem,
};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(create_one, create_many, list_all, list_one, update_one, delete_one),
    components(
        schemas(Item, CreateItem, UpdateItem, InsertedId, InsertedIds, UpdateCounts, DeleteCount),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = "Items", description = "Item management endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/items/create/one", post(create_one))
        .route("/items/create/many", post(create_many))
        .route("/items/list", get(list_all))
        .route("/items/list/{id}", get(list_one))
        .route("/items/update/{id}", put(update_one))
        .route("/items/delete/{id}", delete(delete_one))
        .method_not_allowed_fallback(method_not_allowed)
        .layer(middleware::from_fn(json_content_type))
        .with_state(shared_service)
}

/// Create a single item
#[utoipa::path(
    post,
    path = "/items/create/one",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created", body = InsertedId),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn create_one<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> ItemResult<(StatusCode, Json<InsertedId>)> {
    let inserted = service.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(inserted)))
}

/// Create several items at once
///
/// The whole batch is validated first; one invalid item rejects the request.
#[utoipa::path(
    post,
    path = "/items/create/many",
    tag = "Items",
    request_body = Vec<CreateItem>,
    responses(
        (status = 201, description = "Items created, ids in input order", body = InsertedIds),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn create_many<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    JsonBody(inputs): JsonBody<Vec<CreateItem>>,
) -> ItemResult<(StatusCode, Json<InsertedIds>)> {
    let inserted = service.create_items(inputs).await?;
    Ok((StatusCode::CREATED, Json(inserted)))
}

/// List all items
#[utoipa::path(
    get,
    path = "/items/list",
    tag = "Items",
    responses(
        (status = 200, description = "All items", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_all<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/items/list/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ID (24-character hex)")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_one<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    PathId(id): PathId,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(&id).await?;
    Ok(Json(item))
}

/// Replace the title and price of an item
#[utoipa::path(
    put,
    path = "/items/update/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ID (24-character hex)")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated", body = UpdateCounts),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn update_one<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    PathId(id): PathId,
    ValidatedJson(input): ValidatedJson<UpdateItem>,
) -> ItemResult<Json<UpdateCounts>> {
    let counts = service.update_item(&id, input).await?;
    Ok(Json(counts))
}

/// Delete an item
///
/// Deleting a missing item is not an error; `deletedCount` is 0.
#[utoipa::path(
    delete,
    path = "/items/delete/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ID (24-character hex)")
    ),
    responses(
        (status = 200, description = "Delete acknowledged", body = DeleteCount),
        (status = 400, response = BadRequestIdResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn delete_one<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    PathId(id): PathId,
) -> ItemResult<Json<DeleteCount>> {
    let deleted = service.delete_item(&id).await?;
    Ok(Json(deleted))
}
