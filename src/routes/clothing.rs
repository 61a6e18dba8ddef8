//! `/api/clothing` handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult, OptionExt},
    extract::JsonBody,
    state::AppState,
    types::{ClothingItem, CreateItemRequest, ItemFilter, MessageResponse, UpdateItemRequest},
};

const ITEM: &str = "Item";

/// Ids are unsigned digit strings; anything else (signs, spaces, overflow)
/// can never match a row.
fn parse_item_id(raw: &str) -> AppResult<i64> {
    let not_found = || AppError::NotFound(format!("{} not found", ITEM));
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_found());
    }
    raw.parse::<i64>().map_err(|_| not_found())
}

pub async fn list_items(
    State(state): State<AppState>,
    Query(filter): Query<ItemFilter>,
) -> AppResult<Json<Vec<ClothingItem>>> {
    state.metrics.inc_list_requests();
    let items = state.store.list(&filter.normalized()).await?;
    Ok(Json(items))
}

pub async fn get_item(State(state): State<AppState>, Path(raw_id): Path<String>) -> AppResult<Json<ClothingItem>> {
    let id = parse_item_id(&raw_id)?;
    let item = state.store.get(id).await?.ok_or_not_found(ITEM)?;
    Ok(Json(item))
}

pub async fn create_item(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateItemRequest>,
) -> AppResult<(StatusCode, Json<ClothingItem>)> {
    let new_item = req.into_new_item().inspect_err(|e| {
        if e.status().is_server_error() {
            state.metrics.inc_mutations_failed();
        }
    })?;
    let created = state.store.create(&new_item).await.inspect_err(|_| state.metrics.inc_mutations_failed())?;
    state.metrics.inc_items_created();
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(req): JsonBody<UpdateItemRequest>,
) -> AppResult<Json<ClothingItem>> {
    let id = parse_item_id(&raw_id)?;
    let updated = state
        .store
        .update(id, &req)
        .await
        .inspect_err(|_| state.metrics.inc_mutations_failed())?
        .ok_or_not_found(ITEM)?;
    state.metrics.inc_items_updated();
    Ok(Json(updated))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_item_id(&raw_id)?;
    let deleted = state.store.delete(id).await.inspect_err(|_| state.metrics.inc_mutations_failed())?;
    if !deleted {
        return Err(AppError::NotFound(format!("{} not found", ITEM)));
    }
    state.metrics.inc_items_deleted();
    Ok(Json(MessageResponse { message: "Item deleted successfully".to_string() }))
}

pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let categories = state.store.categories().await?;
    Ok(Json(categories))
}
