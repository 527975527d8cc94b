//! Item HTTP Routes
//!
//! The five item endpoints, each mapped onto one store operation.

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::model::{Item, ItemPayload, NewItem, ValidationError};
use crate::store::ItemStore;

use super::errors::{ApiError, ApiResult};
use super::response::{ItemSaved, MessageResponse};

/// Create item routes. Mounted under `/api`.
pub fn item_routes(store: ItemStore) -> Router {
    Router::new()
        .route("/items", get(list_items_handler).post(create_item_handler))
        .route(
            "/items/:id",
            get(get_item_handler)
                .put(update_item_handler)
                .delete(delete_item_handler),
        )
        .with_state(store)
}

// ==================
// Extraction
// ==================

fn item_id(path: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => Err(ValidationError::InvalidId(rejection.body_text()).into()),
    }
}

/// Decode and validate a create/update body. Framework rejections become
/// 400s with the usual `{error}` body.
fn item_input(body: Result<Json<ItemPayload>, JsonRejection>) -> ApiResult<NewItem> {
    let Json(payload) =
        body.map_err(|rejection| ValidationError::MalformedBody(rejection.body_text()))?;
    Ok(payload.validate()?)
}

// ==================
// Handlers
// ==================

async fn list_items_handler(State(store): State<ItemStore>) -> ApiResult<Json<Vec<Item>>> {
    let items = store.list().await?;
    Ok(Json(items))
}

async fn get_item_handler(
    State(store): State<ItemStore>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Item>> {
    let id = item_id(path)?;
    let item = store.get(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(item))
}

async fn create_item_handler(
    State(store): State<ItemStore>,
    body: Result<Json<ItemPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ItemSaved>)> {
    let input = item_input(body)?;
    let item = store.create(&input).await?;
    Ok((StatusCode::CREATED, Json(ItemSaved::created(item))))
}

async fn update_item_handler(
    State(store): State<ItemStore>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<ItemPayload>, JsonRejection>,
) -> ApiResult<Json<ItemSaved>> {
    let id = item_id(path)?;
    let input = item_input(body)?;
    let item = store.update(id, &input).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(ItemSaved::updated(item)))
}

async fn delete_item_handler(
    State(store): State<ItemStore>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = item_id(path)?;
    if !store.delete(id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(Json(MessageResponse::deleted()))
}
