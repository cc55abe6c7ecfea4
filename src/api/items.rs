//! Item API endpoints.

use axum::{extract::State, Json};

use super::{error, success, ApiResult};
use crate::models::{DeleteItemsRequest, Item};
use crate::AppState;

/// GET /api/items - List all items in ascending timestamp order.
pub async fn list_items(State(state): State<AppState>) -> ApiResult<Vec<Item>> {
    match state.service.list_items().await {
        Ok(items) => success(items),
        Err(e) => error(e),
    }
}

/// POST /api/items/fetch - Run a batch of fetch cycles and persist the results.
pub async fn fetch_items(State(state): State<AppState>) -> ApiResult<Vec<Item>> {
    match state.service.add_new_items().await {
        Ok(items) => success(items),
        Err(e) => error(e),
    }
}

/// POST /api/items/delete - Delete items by their position in the displayed list.
pub async fn delete_items(
    State(state): State<AppState>,
    Json(request): Json<DeleteItemsRequest>,
) -> ApiResult<()> {
    match state.service.delete_items(&request.offsets).await {
        Ok(()) => success(()),
        Err(e) => error(e),
    }
}

/// DELETE /api/items - Delete all items, returning how many were removed.
pub async fn delete_all_items(State(state): State<AppState>) -> ApiResult<u64> {
    match state.service.delete_all_items().await {
        Ok(count) => success(count),
        Err(e) => error(e),
    }
}
