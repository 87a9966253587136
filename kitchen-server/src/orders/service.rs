//! Kitchen order orchestration
//!
//! Creating an order validates every line against the live menu, snapshots
//! name and price, writes the order and its lines in one transaction and
//! only then asks the inventory service to deduct stock. The deduction is
//! best-effort: its outcome is logged and never changes the result.

use std::sync::Arc;

use shared::error::ErrorCode;
use shared::models::{
    InventoryDeductionRequest, InventoryItem, KitchenOrder, KitchenOrderCreate, KitchenOrderFilter,
    KitchenOrderItemInput, KitchenOrderUpdate, OrderStatus, StatusCounts,
};
use sqlx::SqlitePool;

use super::error::{OrderError, OrderResult};
use super::money;
use super::status::can_transition;
use crate::db::repository::begin_write;
use crate::db::repository::kitchen_order::{self as order_repo, NewOrder, NewOrderLine};
use crate::db::repository::menu_item as menu_repo;
use crate::inventory::{DeductOutcome, InventoryGateway};

#[derive(Clone)]
pub struct KitchenOrderService {
    pool: SqlitePool,
    inventory: Arc<dyn InventoryGateway>,
}

impl KitchenOrderService {
    pub fn new(pool: SqlitePool, inventory: Arc<dyn InventoryGateway>) -> Self {
        Self { pool, inventory }
    }

    // ========== Commands ==========

    pub async fn create_order(&self, payload: KitchenOrderCreate) -> OrderResult<KitchenOrder> {
        validate_lines(&payload.items)?;

        let mut tx = begin_write(&self.pool).await?;
        let lines = price_lines(&mut tx, &payload.items).await?;
        let total_amount = money::order_total(lines.iter().map(|l| (l.price, l.quantity)));

        let header = NewOrder {
            restaurant_id: payload.restaurant_id,
            table_number: payload.table_number.as_deref(),
            staff_id: payload.staff_id,
            special_instructions: payload.special_instructions.as_deref(),
            total_amount,
        };
        let order_id = order_repo::insert_order(&mut tx, &header).await?;
        order_repo::insert_items(&mut tx, order_id, &lines).await?;
        tx.commit().await?;

        tracing::info!(
            order_id,
            item_count = lines.len(),
            total_amount,
            "Created kitchen order"
        );

        let requests: Vec<InventoryDeductionRequest> = lines
            .iter()
            .map(|l| InventoryDeductionRequest {
                item_name: l.item_name.clone(),
                quantity: l.quantity,
            })
            .collect();
        let outcome = self.inventory.deduct(&requests).await;
        log_deduction(order_id, &outcome);

        self.get_order(order_id).await
    }

    /// Replace the order header and, when non-empty lines are given, the lines
    ///
    /// A missing order is reported before any line is looked at. Lines are
    /// then validated and priced exactly as on create. No inventory
    /// deduction happens on update.
    pub async fn update_order(
        &self,
        id: i64,
        payload: KitchenOrderUpdate,
    ) -> OrderResult<KitchenOrder> {
        let mut tx = begin_write(&self.pool).await?;
        if order_repo::find_status(&mut *tx, id).await?.is_none() {
            return Err(OrderError::OrderNotFound(id));
        }

        let new_items = payload.items.as_deref().filter(|items| !items.is_empty());
        let new_total = match new_items {
            Some(items) => {
                validate_lines(items)?;
                let lines = price_lines(&mut tx, items).await?;
                order_repo::delete_items(&mut tx, id).await?;
                order_repo::insert_items(&mut tx, id, &lines).await?;
                Some(money::order_total(lines.iter().map(|l| (l.price, l.quantity))))
            }
            None => None,
        };

        let header = NewOrder {
            restaurant_id: payload.restaurant_id,
            table_number: payload.table_number.as_deref(),
            staff_id: payload.staff_id,
            special_instructions: payload.special_instructions.as_deref(),
            total_amount: new_total.unwrap_or_default(),
        };
        order_repo::update_header(&mut tx, id, &header, new_total).await?;
        tx.commit().await?;

        tracing::info!(
            order_id = id,
            lines_replaced = new_total.is_some(),
            "Updated kitchen order"
        );
        self.get_order(id).await
    }

    pub async fn delete_order(&self, id: i64) -> OrderResult<()> {
        if !order_repo::delete(&self.pool, id).await? {
            return Err(OrderError::OrderNotFound(id));
        }
        tracing::info!(order_id = id, "Deleted kitchen order");
        Ok(())
    }

    pub async fn update_status(&self, id: i64, status: OrderStatus) -> OrderResult<KitchenOrder> {
        let current = order_repo::find_status(&self.pool, id)
            .await?
            .ok_or(OrderError::OrderNotFound(id))?;

        if !can_transition(current, status) {
            tracing::warn!(order_id = id, from = %current, to = %status, "Rejected status transition");
            return Err(OrderError::InvalidTransition {
                from: current,
                to: status,
            });
        }

        if !order_repo::update_status(&self.pool, id, current, status).await? {
            // Deleted or moved on since the read above
            let actual = order_repo::find_status(&self.pool, id)
                .await?
                .ok_or(OrderError::OrderNotFound(id))?;
            tracing::warn!(order_id = id, from = %actual, to = %status, "Status changed concurrently, transition rejected");
            return Err(OrderError::InvalidTransition {
                from: actual,
                to: status,
            });
        }
        tracing::info!(order_id = id, from = %current, to = %status, "Order status updated");
        self.get_order(id).await
    }

    /// Staff ids are owned by the employee service and are not checked here
    pub async fn assign_staff(&self, id: i64, staff_id: i64) -> OrderResult<KitchenOrder> {
        if !order_repo::assign_staff(&self.pool, id, staff_id).await? {
            return Err(OrderError::OrderNotFound(id));
        }
        tracing::info!(order_id = id, staff_id, "Staff assigned to order");
        self.get_order(id).await
    }

    // ========== Queries ==========

    pub async fn get_order(&self, id: i64) -> OrderResult<KitchenOrder> {
        order_repo::find_by_id(&self.pool, id)
            .await?
            .ok_or(OrderError::OrderNotFound(id))
    }

    pub async fn list_orders(&self, filter: KitchenOrderFilter) -> OrderResult<Vec<KitchenOrder>> {
        Ok(order_repo::find_all(&self.pool, filter).await?)
    }

    pub async fn count_by_status(&self, status: OrderStatus) -> OrderResult<u64> {
        let count = order_repo::count_by_status(&self.pool, status).await?;
        Ok(count.max(0) as u64)
    }

    /// Counts for every status, zeros included
    pub async fn dashboard_counts(&self) -> OrderResult<StatusCounts> {
        let mut counts = StatusCounts::default();
        for (status, count) in order_repo::count_grouped(&self.pool).await? {
            counts.set(status, count.max(0) as u64);
        }
        Ok(counts)
    }

    // ========== Inventory passthrough ==========

    pub async fn inventory_items(&self) -> Vec<InventoryItem> {
        self.inventory.list_items().await
    }

    pub async fn inventory_item(&self, id: i64) -> OrderResult<InventoryItem> {
        self.inventory
            .get_item(id)
            .await
            .ok_or(OrderError::InventoryItemNotFound(id))
    }

    pub async fn check_stock(&self, item_name: &str, quantity: i32) -> bool {
        self.inventory.check_stock(item_name, quantity).await
    }
}

fn validate_lines(items: &[KitchenOrderItemInput]) -> OrderResult<()> {
    if items.is_empty() {
        return Err(OrderError::validation(
            ErrorCode::OrderEmpty,
            "Order must contain at least one item",
        ));
    }
    for item in items {
        if item.quantity <= 0 {
            return Err(OrderError::validation(
                ErrorCode::InvalidQuantity,
                format!(
                    "Quantity for menu item {} must be greater than 0, got {}",
                    item.menu_item_id, item.quantity
                ),
            ));
        }
    }
    Ok(())
}

/// Resolve every input against the menu inside the open transaction
async fn price_lines(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    items: &[KitchenOrderItemInput],
) -> OrderResult<Vec<NewOrderLine>> {
    let mut lines = Vec::with_capacity(items.len());
    for input in items {
        let menu_item = menu_repo::find_by_id(&mut **tx, input.menu_item_id)
            .await?
            .ok_or(OrderError::MenuItemNotFound(input.menu_item_id))?;

        if !menu_item.is_available {
            return Err(OrderError::ItemUnavailable {
                id: menu_item.id,
                name: menu_item.item_name,
            });
        }

        lines.push(NewOrderLine {
            menu_item_id: menu_item.id,
            item_name: menu_item.item_name,
            quantity: input.quantity,
            price: menu_item.price,
            notes: input.notes.clone(),
        });
    }
    Ok(lines)
}

fn log_deduction(order_id: i64, outcome: &DeductOutcome) {
    match outcome {
        DeductOutcome::Delivered => {
            tracing::info!(order_id, "Inventory deduction delivered");
        }
        DeductOutcome::TransportFailed { reason } => {
            tracing::warn!(
                order_id,
                reason = %reason,
                "Inventory deduction not delivered, order kept"
            );
        }
        DeductOutcome::NotAttempted => {
            tracing::debug!(order_id, "Inventory deduction not attempted");
        }
    }
}
