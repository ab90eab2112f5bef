//! Item handlers: one storage call per route, absent results become 404.

use crate::error::{AppError, ErrorBody};
use crate::extractors::DbSession;
use crate::model::{Item, ItemSearch, NewItem};
use crate::response::{deleted, Message};
use crate::service::ItemService;
use axum::{
    extract::{Path, Query},
    Json,
};

#[utoipa::path(
    post,
    path = "/items/",
    tag = "items",
    request_body = NewItem,
    responses((status = 200, description = "Created item with its assigned id", body = Item))
)]
pub async fn create(
    mut session: DbSession,
    Json(payload): Json<NewItem>,
) -> Result<Json<Item>, AppError> {
    let item = ItemService::create(&mut session, &payload).await?;
    tracing::info!(id = item.id, "item created");
    Ok(Json(item))
}

#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    responses((status = 200, description = "Every item", body = [Item]))
)]
pub async fn list(mut session: DbSession) -> Result<Json<Vec<Item>>, AppError> {
    Ok(Json(ItemService::retrieve_all(&mut session).await?))
}

#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item", body = Item),
        (status = 404, description = "No item with this id", body = ErrorBody)
    )
)]
pub async fn read(mut session: DbSession, Path(id): Path<i64>) -> Result<Json<Item>, AppError> {
    let item = ItemService::retrieve(&mut session, id)
        .await?
        .ok_or(AppError::NotFound(id))?;
    Ok(Json(item))
}

#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    request_body = NewItem,
    responses(
        (status = 200, description = "The item after replacing every field", body = Item),
        (status = 404, description = "No item with this id", body = ErrorBody)
    )
)]
pub async fn update(
    mut session: DbSession,
    Path(id): Path<i64>,
    Json(payload): Json<NewItem>,
) -> Result<Json<Item>, AppError> {
    let item = ItemService::update(&mut session, id, &payload)
        .await?
        .ok_or(AppError::NotFound(id))?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Deletion confirmed", body = Message),
        (status = 404, description = "No item with this id", body = ErrorBody)
    )
)]
pub async fn delete(
    mut session: DbSession,
    Path(id): Path<i64>,
) -> Result<Json<Message>, AppError> {
    if !ItemService::delete(&mut session, id).await? {
        return Err(AppError::NotFound(id));
    }
    tracing::info!(id, "item deleted");
    Ok(Json(deleted(id)))
}

/// Empty results are a normal 200, never 404.
#[utoipa::path(
    get,
    path = "/items/search/",
    tag = "items",
    params(ItemSearch),
    responses(
        (status = 200, description = "Items matching every supplied criterion", body = [Item])
    )
)]
pub async fn search(
    mut session: DbSession,
    Query(criteria): Query<ItemSearch>,
) -> Result<Json<Vec<Item>>, AppError> {
    Ok(Json(ItemService::search(&mut session, &criteria).await?))
}
