//! Data models
//!
//! Shared between kitchen-server and its API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod inventory;
pub mod kitchen_order;
pub mod menu_item;

// Re-exports
pub use inventory::*;
pub use kitchen_order::*;
pub use menu_item::*;
