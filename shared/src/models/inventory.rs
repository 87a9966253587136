//! Inventory service wire types
//!
//! The inventory service is an external collaborator. These DTOs only carry
//! what the kitchen needs: a deduction request per order line and a
//! display-only view of stock.

use serde::{Deserialize, Serialize};

/// One deduction per order line, keyed by item name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryDeductionRequest {
    pub item_name: String,
    pub quantity: i32,
}

/// Stock item as reported by the inventory service
///
/// Unknown fields are ignored so the inventory service can evolve freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: i64,
    pub item_name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub reorder_level: Option<f64>,
}
