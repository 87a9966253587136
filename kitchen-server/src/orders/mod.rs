//! Kitchen order orchestration
//!
//! - [`status`] - lifecycle transition table
//! - [`money`] - decimal totals
//! - [`service`] - [`KitchenOrderService`], the orchestrator
//! - [`error`] - [`OrderError`] and its mapping to API errors

pub mod error;
pub mod money;
pub mod service;
pub mod status;

pub use error::{OrderError, OrderResult};
pub use service::KitchenOrderService;
pub use status::{ALLOWED_TRANSITIONS, can_transition};
