use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use axum_helpers::{
    IdPath, ValidatedJson, ValidatedQuery,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, ItemCountFilter, ItemFilter, UpdateItem};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, count_items, get_item, update_item, delete_item),
    components(
        schemas(Item, CreateItem, UpdateItem, ItemFilter, ItemCountFilter),
        responses(NotFoundResponse, BadRequestValidationResponse, BadRequestIdResponse)
    ),
    tags(
        (name = "Items", description = "Item management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/count", get(count_items))
        .route("/{id}", get(get_item).put(update_item).delete(delete_item))
        .with_state(shared_service)
}

/// List items, filtered then paginated, in creation order
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    params(ItemFilter),
    responses(
        (status = 200, description = "Items matching the filters", body = Vec<Item>),
        (status = 400, response = BadRequestValidationResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedQuery(filter): ValidatedQuery<ItemFilter>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_items(filter)?;
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created successfully", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 422, description = "Malformed body or null for a required field")
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(input)?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Count items matching the filters
///
/// `skip` and `limit` are ignored here; the count covers every match.
#[utoipa::path(
    get,
    path = "/count",
    tag = "Items",
    params(ItemCountFilter),
    responses(
        (status = 200, description = "Item count", body = usize),
        (status = 400, response = BadRequestValidationResponse)
    )
)]
async fn count_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedQuery(filter): ValidatedQuery<ItemCountFilter>,
) -> ItemResult<Json<usize>> {
    let count = service.count_items(filter)?;
    Ok(Json(count))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = u64, Path, description = "Item ID (positive integer)")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(id)?;
    Ok(Json(item))
}

/// Update an item (full or partial)
///
/// Fields missing from the body are left unchanged; `description: null`
/// clears the description.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = u64, Path, description = "Item ID (positive integer)")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated successfully", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 422, description = "Malformed body or null for a required field")
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateItem>,
) -> ItemResult<Json<Item>> {
    let item = service.update_item(id, input)?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = u64, Path, description = "Item ID (positive integer)")
    ),
    responses(
        (status = 204, description = "Item deleted, empty body"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<impl IntoResponse> {
    service.delete_item(id)?;
    Ok(StatusCode::NO_CONTENT)
}
