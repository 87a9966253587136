//! Kitchen Server - hotel kitchen order orchestration
//!
//! Accepts kitchen orders from restaurant staff, prices every line against
//! the live menu, tracks the PENDING → COOKING → READY → SERVED lifecycle
//! and tells the inventory service which stock to deduct.
//!
//! # Module layout
//!
//! ```text
//! kitchen-server/src/
//! ├── api/         # HTTP routes and handlers
//! ├── core/        # config, state, server lifecycle
//! ├── db/          # SQLite pool and repositories
//! ├── inventory/   # inventory service gateway
//! ├── orders/      # order orchestration and lifecycle rules
//! └── utils/       # error re-exports, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod inventory;
pub mod orders;
pub mod utils;

pub use core::{Config, Server, ServerState};
pub use inventory::{DeductOutcome, InventoryGateway};
pub use orders::{KitchenOrderService, OrderError};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, then set up logging from the resulting configuration
pub fn setup_environment() -> Config {
    // A missing .env file is normal outside development
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.json_logs(),
        config.log_dir.as_deref(),
    );
    api::health::mark_started();
    config
}
