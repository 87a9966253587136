//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kitchen_server::db::DbService;
use kitchen_server::db::repository::menu_item;
use kitchen_server::inventory::{DeductOutcome, InventoryGateway};
use kitchen_server::{Config, ServerState};
use shared::models::{
    InventoryDeductionRequest, InventoryItem, KitchenOrderCreate, KitchenOrderItemInput, MealType,
    MenuItem, MenuItemCreate, ServiceType,
};
use tempfile::TempDir;

/// Gateway that remembers every deduction batch and serves a fixed stock list
#[derive(Default)]
pub struct RecordingGateway {
    pub deductions: Mutex<Vec<Vec<InventoryDeductionRequest>>>,
    pub stock: Vec<InventoryItem>,
}

impl RecordingGateway {
    pub fn with_stock(stock: Vec<InventoryItem>) -> Self {
        Self {
            deductions: Mutex::new(Vec::new()),
            stock,
        }
    }

    pub fn batches(&self) -> Vec<Vec<InventoryDeductionRequest>> {
        self.deductions.lock().unwrap().clone()
    }
}

#[async_trait]
impl InventoryGateway for RecordingGateway {
    async fn deduct(&self, requests: &[InventoryDeductionRequest]) -> DeductOutcome {
        if requests.is_empty() {
            return DeductOutcome::NotAttempted;
        }
        self.deductions.lock().unwrap().push(requests.to_vec());
        DeductOutcome::Delivered
    }

    async fn list_items(&self) -> Vec<InventoryItem> {
        self.stock.clone()
    }

    async fn get_item(&self, id: i64) -> Option<InventoryItem> {
        self.stock.iter().find(|item| item.id == id).cloned()
    }

    async fn check_stock(&self, item_name: &str, quantity: i32) -> bool {
        self.stock
            .iter()
            .find(|item| item.item_name == item_name)
            .map(|item| item.quantity >= f64::from(quantity))
            .unwrap_or(false)
    }
}

/// Gateway whose every call fails the way an unreachable service would
pub struct FailingGateway;

#[async_trait]
impl InventoryGateway for FailingGateway {
    async fn deduct(&self, _requests: &[InventoryDeductionRequest]) -> DeductOutcome {
        DeductOutcome::TransportFailed {
            reason: "connection refused".into(),
        }
    }

    async fn list_items(&self) -> Vec<InventoryItem> {
        Vec::new()
    }

    async fn get_item(&self, _id: i64) -> Option<InventoryItem> {
        None
    }

    async fn check_stock(&self, _item_name: &str, _quantity: i32) -> bool {
        true
    }
}

pub fn stock_item(id: i64, name: &str, quantity: f64) -> InventoryItem {
    InventoryItem {
        id,
        item_name: name.to_string(),
        category: Some("Dry goods".into()),
        quantity,
        unit: Some("kg".into()),
        reorder_level: Some(5.0),
    }
}

/// Fresh in-memory state wired to the given gateway
pub async fn state_with(gateway: Arc<dyn InventoryGateway>) -> ServerState {
    let db = DbService::open_in_memory().await.unwrap();
    let config = Config::with_overrides(":memory:", 0, None);
    ServerState::new(config, db.pool, gateway)
}

/// State over a WAL database file with a real multi-connection pool
///
/// Keep the returned directory alive for as long as the state is used.
pub async fn state_with_file_db(gateway: Arc<dyn InventoryGateway>) -> (ServerState, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kitchen.db");
    let path = path.to_str().unwrap();
    let db = DbService::new(path).await.unwrap();
    let config = Config::with_overrides(path, 0, None);
    (ServerState::new(config, db.pool, gateway), dir)
}

pub async fn seed_menu_item(
    state: &ServerState,
    name: &str,
    price: f64,
    available: bool,
) -> MenuItem {
    menu_item::create(
        &state.pool,
        MenuItemCreate {
            item_name: name.to_string(),
            category: "Main".into(),
            price,
            is_available: available,
            meal_type: MealType::Lunch,
            service_type: ServiceType::Restaurant,
            menu_date: "2026-10-18".into(),
            restaurant_id: 1,
            description: None,
        },
    )
    .await
    .unwrap()
}

pub fn line(menu_item_id: i64, quantity: i32) -> KitchenOrderItemInput {
    KitchenOrderItemInput {
        menu_item_id,
        quantity,
        notes: None,
    }
}

pub fn order_for(
    restaurant_id: i64,
    staff_id: Option<i64>,
    items: Vec<KitchenOrderItemInput>,
) -> KitchenOrderCreate {
    KitchenOrderCreate {
        restaurant_id,
        table_number: Some("T1".into()),
        staff_id,
        special_instructions: None,
        items,
    }
}
