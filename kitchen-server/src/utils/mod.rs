//! Utility module
//!
//! - [`AppError`] - application error type (from shared::error)
//! - [`ApiResponse`] - `{success, message, data}` envelope (from shared::error)
//! - logger setup

pub mod error;
pub mod logger;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
