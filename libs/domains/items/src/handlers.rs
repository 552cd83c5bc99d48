use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    routing::get,
};
use axum_helpers::errors::responses::{
    BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
};
use utoipa::OpenApi;

use crate::codec;
use crate::error::ItemResult;
use crate::models::{ItemResponse, MessageResponse, PutItemRequest};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, put_item, get_item, delete_item),
    components(
        schemas(ItemResponse, PutItemRequest, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Items", description = "Item CRUD endpoints (DynamoDB)")
    )
)]
pub struct ApiDoc;

/// Create the items router
///
/// Paths are absolute (`/items`, `/items/{item_id}`); merge the router at the
/// root rather than nesting it.
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    Router::new()
        .route("/items", get(list_items).put(put_item))
        .route("/items/{item_id}", get(get_item).delete(delete_item))
        .with_state(service)
}

/// List every item
#[utoipa::path(
    get,
    path = "/items",
    tag = "Items",
    responses(
        (status = 200, description = "All stored items", body = Vec<ItemResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<ItemService<R>>,
) -> ItemResult<Json<Vec<ItemResponse>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Create or replace an item
///
/// The body is read as raw JSON so that missing fields are reported with the
/// validation message instead of a deserializer rejection.
#[utoipa::path(
    put,
    path = "/items",
    tag = "Items",
    request_body = PutItemRequest,
    responses(
        (status = 200, description = "Item written", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn put_item<R: ItemRepository>(
    State(service): State<ItemService<R>>,
    body: Bytes,
) -> ItemResult<Json<MessageResponse>> {
    let body = codec::parse_body(&body)?;
    let id = service.put_item(&body).await?;
    Ok(Json(MessageResponse::put(&id)))
}

/// Get an item by id
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    tag = "Items",
    params(
        ("item_id" = String, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<ItemService<R>>,
    Path(item_id): Path<String>,
) -> ItemResult<Json<ItemResponse>> {
    let item = service.get_item(&item_id).await?;
    Ok(Json(item))
}

/// Delete an item
///
/// Succeeds whether or not the item existed.
#[utoipa::path(
    delete,
    path = "/items/{item_id}",
    tag = "Items",
    params(
        ("item_id" = String, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted (or was already absent)", body = MessageResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<ItemService<R>>,
    Path(item_id): Path<String>,
) -> ItemResult<Json<MessageResponse>> {
    service.delete_item(&item_id).await?;
    Ok(Json(MessageResponse::deleted(&item_id)))
}
