//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Meal service a menu item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Buffet,
}

/// Where the item is served (restaurant floor or banquet event)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ServiceType {
    #[default]
    Restaurant,
    Event,
}

/// Menu item entity
///
/// Orders copy `item_name` and `price` at creation time, so later edits
/// here never change existing orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub item_name: String,
    pub category: String,
    pub price: f64,
    pub is_available: bool,
    pub meal_type: MealType,
    pub service_type: ServiceType,
    /// ISO date (YYYY-MM-DD) the item is offered on
    pub menu_date: String,
    pub restaurant_id: i64,
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub item_name: String,
    pub category: String,
    pub price: f64,
    #[serde(default = "default_true")]
    pub is_available: bool,
    pub meal_type: MealType,
    #[serde(default)]
    pub service_type: ServiceType,
    pub menu_date: String,
    pub restaurant_id: i64,
    pub description: Option<String>,
}

fn default_true() -> bool {
    true
}
