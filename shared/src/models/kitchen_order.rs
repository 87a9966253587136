//! Kitchen Order Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kitchen order lifecycle status
///
/// Orders move strictly forward: PENDING → COOKING → READY → SERVED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum OrderStatus {
    Pending,
    Cooking,
    Ready,
    Served,
}

impl OrderStatus {
    /// All statuses in lifecycle order
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Cooking,
        OrderStatus::Ready,
        OrderStatus::Served,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Cooking => "COOKING",
            OrderStatus::Ready => "READY",
            OrderStatus::Served => "SERVED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for status text that names no known status
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid order status: {0}")]
pub struct ParseOrderStatusError(pub String);

impl FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    /// Case-insensitive: `"cooking"`, `"Cooking"` and `"COOKING"` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseOrderStatusError(s.to_string()))
    }
}

/// Kitchen order line (independent table)
///
/// `item_name` and `price` are snapshots of the menu item at order time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct KitchenOrderItem {
    pub id: i64,
    pub order_id: i64,
    pub menu_item_id: i64,
    pub item_name: String,
    pub quantity: i32,
    pub price: f64,
    pub notes: Option<String>,
}

/// Kitchen order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct KitchenOrder {
    pub id: i64,
    pub restaurant_id: i64,
    pub table_number: Option<String>,
    pub staff_id: Option<i64>,
    pub status: OrderStatus,
    pub special_instructions: Option<String>,
    /// Σ(line price × quantity), rounded to 2 decimal places
    pub total_amount: f64,
    pub created_at: i64,
    pub updated_at: i64,

    // -- Relations (populated by application code, skipped by FromRow) --

    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default, rename = "orderItems")]
    pub items: Vec<KitchenOrderItem>,
}

/// Line item input (for create/update, without id/order_id)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitchenOrderItemInput {
    pub menu_item_id: i64,
    pub quantity: i32,
    pub notes: Option<String>,
}

/// Create kitchen order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitchenOrderCreate {
    pub restaurant_id: i64,
    pub table_number: Option<String>,
    pub staff_id: Option<i64>,
    pub special_instructions: Option<String>,
    #[serde(default, rename = "orderItems")]
    pub items: Vec<KitchenOrderItemInput>,
}

/// Update kitchen order payload
///
/// `restaurant_id`, `table_number` and `special_instructions` are always
/// replaced. `staff_id` is only replaced when present. Lines are only
/// replaced when `items` is present and non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitchenOrderUpdate {
    pub restaurant_id: i64,
    pub table_number: Option<String>,
    pub staff_id: Option<i64>,
    pub special_instructions: Option<String>,
    #[serde(default, rename = "orderItems")]
    pub items: Option<Vec<KitchenOrderItemInput>>,
}

/// Optional single-field filters for listing orders (AND-combined)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KitchenOrderFilter {
    pub status: Option<OrderStatus>,
    pub staff_id: Option<i64>,
    pub restaurant_id: Option<i64>,
}

/// Number of orders per status, serialized in lifecycle order
///
/// ```json
/// {"PENDING": 2, "COOKING": 0, "READY": 1, "SERVED": 5}
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct StatusCounts {
    pub pending: u64,
    pub cooking: u64,
    pub ready: u64,
    pub served: u64,
}

impl StatusCounts {
    pub fn get(&self, status: OrderStatus) -> u64 {
        match status {
            OrderStatus::Pending => self.pending,
            OrderStatus::Cooking => self.cooking,
            OrderStatus::Ready => self.ready,
            OrderStatus::Served => self.served,
        }
    }

    pub fn set(&mut self, status: OrderStatus, count: u64) {
        let slot = match status {
            OrderStatus::Pending => &mut self.pending,
            OrderStatus::Cooking => &mut self.cooking,
            OrderStatus::Ready => &mut self.ready,
            OrderStatus::Served => &mut self.served,
        };
        *slot = count;
    }

    pub fn total(&self) -> u64 {
        OrderStatus::ALL.iter().map(|s| self.get(*s)).sum()
    }
}
