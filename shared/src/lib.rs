//! Shared types for the kitchen services
//!
//! Wire models, the unified error system and the response envelope used by
//! kitchen-server and its clients.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
