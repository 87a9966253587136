//! Menu Catalog API Handlers

use axum::{extract::State, http::StatusCode};
use serde::Deserialize;

use crate::api::extract::{AppJson, AppPath, AppQuery};
use crate::core::ServerState;
use crate::db::repository::{RepoError, menu_item};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{MenuItem, MenuItemCreate};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableQuery {
    pub restaurant_id: Option<i64>,
}

fn menu_item_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::MenuItemNotFound, format!("Menu item {id} not found"))
        .with_detail("menuItemId", id)
}

/// GET /menu
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<MenuItem>>> {
    let items = menu_item::find_all(&state.pool).await?;
    Ok(ApiResponse::success_with_message(
        "Menu items retrieved successfully",
        items,
    ))
}

/// GET /menu/available
pub async fn list_available(
    State(state): State<ServerState>,
    AppQuery(query): AppQuery<AvailableQuery>,
) -> AppResult<ApiResponse<Vec<MenuItem>>> {
    let items = menu_item::find_available(&state.pool, query.restaurant_id).await?;
    Ok(ApiResponse::success_with_message(
        "Available menu items retrieved successfully",
        items,
    ))
}

/// GET /menu/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<ApiResponse<MenuItem>> {
    let item = menu_item::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| menu_item_not_found(id))?;
    Ok(ApiResponse::success_with_message(
        "Menu item retrieved successfully",
        item,
    ))
}

/// POST /menu
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<MenuItemCreate>,
) -> AppResult<(StatusCode, ApiResponse<MenuItem>)> {
    if payload.item_name.trim().is_empty() {
        return Err(AppError::required_field("itemName", "itemName is required"));
    }
    let item = menu_item::create(&state.pool, payload).await?;
    tracing::info!(menu_item_id = item.id, item_name = %item.item_name, "Menu item created");
    Ok((
        StatusCode::CREATED,
        ApiResponse::success_with_message("Menu item created successfully", item),
    ))
}

/// PATCH /menu/{id}/toggle-availability
pub async fn toggle_availability(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<ApiResponse<MenuItem>> {
    let item = match menu_item::toggle_availability(&state.pool, id).await {
        Ok(item) => item,
        Err(RepoError::NotFound(_)) => return Err(menu_item_not_found(id)),
        Err(e) => return Err(e.into()),
    };
    tracing::info!(
        menu_item_id = id,
        is_available = item.is_available,
        "Menu item availability toggled"
    );
    Ok(ApiResponse::success_with_message(
        "Menu item availability updated",
        item,
    ))
}
