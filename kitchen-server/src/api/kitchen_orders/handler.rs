//! Kitchen Order API Handlers

use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::api::extract::{AppJson, AppPath, AppQuery};
use crate::core::ServerState;
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{
    InventoryItem, KitchenOrder, KitchenOrderCreate, KitchenOrderFilter, KitchenOrderUpdate,
    OrderStatus, StatusCounts,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub status: Option<String>,
    pub staff_id: Option<i64>,
    pub restaurant_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignStaffBody {
    pub staff_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuery {
    pub item_name: String,
    pub quantity: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: OrderStatus,
    pub count: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockCheck {
    pub item_name: String,
    pub quantity: i32,
    pub in_stock: bool,
}

fn parse_status(raw: &str) -> AppResult<OrderStatus> {
    raw.parse::<OrderStatus>().map_err(|e| {
        AppError::with_message(ErrorCode::InvalidOrderStatus, e.to_string())
            .with_detail("status", raw)
    })
}

/// POST /orders - create an order
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<KitchenOrderCreate>,
) -> AppResult<(StatusCode, ApiResponse<KitchenOrder>)> {
    let order = state.orders.create_order(payload).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::success_with_message("Kitchen order created successfully", order),
    ))
}

/// GET /orders - list orders, optionally filtered
pub async fn list(
    State(state): State<ServerState>,
    AppQuery(query): AppQuery<ListQuery>,
) -> AppResult<ApiResponse<Vec<KitchenOrder>>> {
    let status = match query.status.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Some(parse_status(raw)?),
        _ => None,
    };
    let filter = KitchenOrderFilter {
        status,
        staff_id: query.staff_id,
        restaurant_id: query.restaurant_id,
    };
    let orders = state.orders.list_orders(filter).await?;
    Ok(ApiResponse::success_with_message(
        "Orders retrieved successfully",
        orders,
    ))
}

/// GET /orders/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<ApiResponse<KitchenOrder>> {
    let order = state.orders.get_order(id).await?;
    Ok(ApiResponse::success_with_message(
        "Order retrieved successfully",
        order,
    ))
}

/// PUT /orders/{id}
pub async fn update(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<KitchenOrderUpdate>,
) -> AppResult<ApiResponse<KitchenOrder>> {
    let order = state.orders.update_order(id, payload).await?;
    Ok(ApiResponse::success_with_message(
        "Kitchen order updated successfully",
        order,
    ))
}

/// DELETE /orders/{id}
pub async fn delete(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<ApiResponse<()>> {
    state.orders.delete_order(id).await?;
    Ok(ApiResponse::ok("Kitchen order deleted successfully"))
}

/// PATCH /orders/{id}/status
pub async fn update_status(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i64>,
    AppJson(body): AppJson<StatusBody>,
) -> AppResult<ApiResponse<KitchenOrder>> {
    let raw = body
        .status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::required_field("status", "Status is required"))?;
    let status = parse_status(raw)?;

    let order = state.orders.update_status(id, status).await?;
    Ok(ApiResponse::success_with_message(
        format!("Order status updated to {status}"),
        order,
    ))
}

/// PATCH /orders/{id}/assign-staff
pub async fn assign_staff(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i64>,
    AppJson(body): AppJson<AssignStaffBody>,
) -> AppResult<ApiResponse<KitchenOrder>> {
    let staff_id = body
        .staff_id
        .ok_or_else(|| AppError::required_field("staffId", "staffId is required"))?;

    let order = state.orders.assign_staff(id, staff_id).await?;
    Ok(ApiResponse::success_with_message(
        "Staff assigned successfully",
        order,
    ))
}

/// GET /orders/dashboard/counts
pub async fn dashboard_counts(
    State(state): State<ServerState>,
) -> AppResult<ApiResponse<StatusCounts>> {
    let counts = state.orders.dashboard_counts().await?;
    Ok(ApiResponse::success_with_message(
        "Dashboard counts retrieved",
        counts,
    ))
}

/// GET /orders/count/{status}
pub async fn count_by_status(
    State(state): State<ServerState>,
    AppPath(raw): AppPath<String>,
) -> AppResult<ApiResponse<StatusCount>> {
    let status = parse_status(&raw)?;
    let count = state.orders.count_by_status(status).await?;
    Ok(ApiResponse::success_with_message(
        "Order count retrieved",
        StatusCount { status, count },
    ))
}

/// GET /orders/inventory
pub async fn inventory_list(State(state): State<ServerState>) -> ApiResponse<Vec<InventoryItem>> {
    let items = state.orders.inventory_items().await;
    ApiResponse::success_with_message("Inventory items retrieved", items)
}

/// GET /orders/inventory/{item_id}
pub async fn inventory_item(
    State(state): State<ServerState>,
    AppPath(item_id): AppPath<i64>,
) -> AppResult<ApiResponse<InventoryItem>> {
    let item = state.orders.inventory_item(item_id).await?;
    Ok(ApiResponse::success_with_message(
        "Inventory item retrieved",
        item,
    ))
}

/// GET /orders/inventory/check-stock
pub async fn check_stock(
    State(state): State<ServerState>,
    AppQuery(query): AppQuery<StockQuery>,
) -> AppResult<ApiResponse<StockCheck>> {
    let item_name = query.item_name.trim();
    if item_name.is_empty() {
        return Err(AppError::required_field("itemName", "itemName is required"));
    }
    let in_stock = state.orders.check_stock(item_name, query.quantity).await;
    Ok(ApiResponse::success_with_message(
        "Stock checked",
        StockCheck {
            item_name: item_name.to_string(),
            quantity: query.quantity,
            in_stock,
        },
    ))
}
