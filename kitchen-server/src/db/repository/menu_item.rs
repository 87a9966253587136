//! Menu Item Repository

use super::{RepoError, RepoResult};
use shared::models::{MenuItem, MenuItemCreate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, item_name, category, price, is_available, meal_type, service_type, menu_date, restaurant_id, description, created_at, updated_at";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(&format!(
        "SELECT {COLUMNS} FROM menu_item ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(items)
}

/// Available items, optionally limited to one restaurant
pub async fn find_available(
    pool: &SqlitePool,
    restaurant_id: Option<i64>,
) -> RepoResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(&format!(
        "SELECT {COLUMNS} FROM menu_item WHERE is_available = 1 AND (?1 IS NULL OR restaurant_id = ?1) ORDER BY id"
    ))
    .bind(restaurant_id)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

/// Look up a single item on the pool or inside an open transaction
pub async fn find_by_id(
    conn: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    id: i64,
) -> RepoResult<Option<MenuItem>> {
    let item = sqlx::query_as::<_, MenuItem>(&format!(
        "SELECT {COLUMNS} FROM menu_item WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(item)
}

pub async fn create(pool: &SqlitePool, data: MenuItemCreate) -> RepoResult<MenuItem> {
    if !data.price.is_finite() || data.price < 0.0 {
        return Err(RepoError::Validation(format!(
            "price must be a non-negative number, got {}",
            data.price
        )));
    }

    let now = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO menu_item (item_name, category, price, is_available, meal_type, service_type, menu_date, restaurant_id, description, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10) RETURNING id",
    )
    .bind(&data.item_name)
    .bind(&data.category)
    .bind(data.price)
    .bind(data.is_available)
    .bind(data.meal_type)
    .bind(data.service_type)
    .bind(&data.menu_date)
    .bind(data.restaurant_id)
    .bind(&data.description)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create menu item".into()))
}

/// Flip `is_available` and return the updated item
pub async fn toggle_availability(pool: &SqlitePool, id: i64) -> RepoResult<MenuItem> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE menu_item SET is_available = NOT is_available, updated_at = ?1 WHERE id = ?2",
    )
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Menu item {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Menu item {id} not found")))
}
