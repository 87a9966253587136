use std::sync::Arc;

use sqlx::SqlitePool;

use crate::core::{Config, Result};
use crate::db::DbService;
use crate::inventory::{self, InventoryGateway};
use crate::orders::KitchenOrderService;

/// Shared state handed to every handler
///
/// Cheap to clone: the pool and the gateway are reference counted.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub orders: KitchenOrderService,
}

impl ServerState {
    /// Wire state from explicit parts (tests pass an in-memory pool and a fake gateway)
    pub fn new(config: Config, pool: SqlitePool, inventory: Arc<dyn InventoryGateway>) -> Self {
        let orders = KitchenOrderService::new(pool.clone(), inventory);
        Self {
            config,
            pool,
            orders,
        }
    }

    /// Open the database and build the inventory gateway from configuration
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_path).await?;
        let inventory = inventory::from_config(config)?;
        Ok(Self::new(config.clone(), db.pool, inventory))
    }
}
