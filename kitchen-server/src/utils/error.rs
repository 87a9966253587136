//! Unified error handling
//!
//! Re-exports the shared error system so handlers only depend on
//! `crate::utils`.
//!
//! ```ignore
//! Err(AppError::not_found(format!("Menu item {id}")))
//! Ok(ApiResponse::success_with_message("Orders retrieved successfully", orders))
//! ```

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
