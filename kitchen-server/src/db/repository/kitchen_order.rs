//! Kitchen Order Repository
//!
//! Orders and their lines live in two tables. Reads assemble the aggregate
//! inside one read transaction so header and lines come from the same
//! snapshot; writes that touch both tables take an open transaction from
//! the caller.

use super::{RepoError, RepoResult, begin_write};
use shared::models::{KitchenOrder, KitchenOrderFilter, KitchenOrderItem, OrderStatus};
use sqlx::SqlitePool;

const ORDER_COLUMNS: &str = "id, restaurant_id, table_number, staff_id, status, special_instructions, total_amount, created_at, updated_at";

/// A priced line ready to be written (name and price already snapshotted)
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderLine {
    pub menu_item_id: i64,
    pub item_name: String,
    pub quantity: i32,
    pub price: f64,
    pub notes: Option<String>,
}

/// Header fields of a new order
#[derive(Debug, Clone)]
pub struct NewOrder<'a> {
    pub restaurant_id: i64,
    pub table_number: Option<&'a str>,
    pub staff_id: Option<i64>,
    pub special_instructions: Option<&'a str>,
    pub total_amount: f64,
}

// ── Reads ────────────────────────────────────────────────────

pub async fn find_items(
    conn: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    order_id: i64,
) -> RepoResult<Vec<KitchenOrderItem>> {
    let items = sqlx::query_as::<_, KitchenOrderItem>(
        "SELECT id, order_id, menu_item_id, item_name, quantity, price, notes FROM kitchen_order_item WHERE order_id = ? ORDER BY id",
    )
    .bind(order_id)
    .fetch_all(conn)
    .await?;
    Ok(items)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<KitchenOrder>> {
    let mut tx = pool.begin().await?;
    let mut order = sqlx::query_as::<_, KitchenOrder>(&format!(
        "SELECT {ORDER_COLUMNS} FROM kitchen_order WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    if let Some(ref mut o) = order {
        o.items = find_items(&mut *tx, o.id).await?;
    }
    tx.commit().await?;
    Ok(order)
}

/// All orders matching every filter that is set, in creation order
pub async fn find_all(
    pool: &SqlitePool,
    filter: KitchenOrderFilter,
) -> RepoResult<Vec<KitchenOrder>> {
    let mut tx = pool.begin().await?;
    let mut orders = sqlx::query_as::<_, KitchenOrder>(&format!(
        "SELECT {ORDER_COLUMNS} FROM kitchen_order \
         WHERE (?1 IS NULL OR status = ?1) \
           AND (?2 IS NULL OR staff_id = ?2) \
           AND (?3 IS NULL OR restaurant_id = ?3) \
         ORDER BY id"
    ))
    .bind(filter.status)
    .bind(filter.staff_id)
    .bind(filter.restaurant_id)
    .fetch_all(&mut *tx)
    .await?;

    for o in &mut orders {
        o.items = find_items(&mut *tx, o.id).await?;
    }
    tx.commit().await?;
    Ok(orders)
}

/// Current status of an order, `None` when it does not exist
pub async fn find_status(
    conn: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    id: i64,
) -> RepoResult<Option<OrderStatus>> {
    let status = sqlx::query_scalar::<_, OrderStatus>("SELECT status FROM kitchen_order WHERE id = ?")
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(status)
}

pub async fn count_by_status(pool: &SqlitePool, status: OrderStatus) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM kitchen_order WHERE status = ?")
        .bind(status)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Order counts per status; statuses without orders are absent
pub async fn count_grouped(pool: &SqlitePool) -> RepoResult<Vec<(OrderStatus, i64)>> {
    let rows = sqlx::query_as::<_, (OrderStatus, i64)>(
        "SELECT status, COUNT(*) FROM kitchen_order GROUP BY status",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

// ── Transactional writes ─────────────────────────────────────

/// Insert the order header with status PENDING and return its id
pub async fn insert_order(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    order: &NewOrder<'_>,
) -> RepoResult<i64> {
    let now = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO kitchen_order (restaurant_id, table_number, staff_id, status, special_instructions, total_amount, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7) RETURNING id",
    )
    .bind(order.restaurant_id)
    .bind(order.table_number)
    .bind(order.staff_id)
    .bind(OrderStatus::Pending)
    .bind(order.special_instructions)
    .bind(order.total_amount)
    .bind(now)
    .fetch_one(&mut **tx)
    .await?;
    Ok(id)
}

pub async fn insert_items(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    order_id: i64,
    lines: &[NewOrderLine],
) -> RepoResult<()> {
    for line in lines {
        sqlx::query(
            "INSERT INTO kitchen_order_item (order_id, menu_item_id, item_name, quantity, price, notes) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(order_id)
        .bind(line.menu_item_id)
        .bind(&line.item_name)
        .bind(line.quantity)
        .bind(line.price)
        .bind(&line.notes)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

pub async fn delete_items(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    order_id: i64,
) -> RepoResult<u64> {
    let rows = sqlx::query("DELETE FROM kitchen_order_item WHERE order_id = ?")
        .bind(order_id)
        .execute(&mut **tx)
        .await?;
    Ok(rows.rows_affected())
}

/// Replace the descriptive header fields
///
/// `staff_id` is kept when `None`; `total_amount` is kept when `None`.
pub async fn update_header(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    id: i64,
    order: &NewOrder<'_>,
    total_amount: Option<f64>,
) -> RepoResult<()> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE kitchen_order SET restaurant_id = ?1, table_number = ?2, staff_id = COALESCE(?3, staff_id), special_instructions = ?4, total_amount = COALESCE(?5, total_amount), updated_at = ?6 WHERE id = ?7",
    )
    .bind(order.restaurant_id)
    .bind(order.table_number)
    .bind(order.staff_id)
    .bind(order.special_instructions)
    .bind(total_amount)
    .bind(now)
    .bind(id)
    .execute(&mut **tx)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Kitchen order {id} not found")));
    }
    Ok(())
}

/// Delete lines first, then the order, in one transaction
///
/// Returns `false` when the order does not exist.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let mut tx = begin_write(pool).await?;
    delete_items(&mut tx, id).await?;
    let rows = sqlx::query("DELETE FROM kitchen_order WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if rows.rows_affected() == 0 {
        tx.rollback().await?;
        return Ok(false);
    }
    tx.commit().await?;
    Ok(true)
}

// ── Single-row updates ───────────────────────────────────────

/// Move an order from `from` to `to`
///
/// The update only applies while the stored status is still `from`.
/// Returns `false` when the order is missing or its status has moved on.
pub async fn update_status(
    pool: &SqlitePool,
    id: i64,
    from: OrderStatus,
    to: OrderStatus,
) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE kitchen_order SET status = ?1, updated_at = ?2 WHERE id = ?3 AND status = ?4",
    )
    .bind(to)
    .bind(now)
    .bind(id)
    .bind(from)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}

/// Last writer wins
pub async fn assign_staff(pool: &SqlitePool, id: i64, staff_id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query("UPDATE kitchen_order SET staff_id = ?1, updated_at = ?2 WHERE id = ?3")
        .bind(staff_id)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
