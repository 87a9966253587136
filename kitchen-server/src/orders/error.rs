//! Order orchestration errors

use shared::error::{AppError, ErrorCode};
use shared::models::OrderStatus;
use thiserror::Error;

use super::status::ALLOWED_FLOW;
use crate::db::repository::RepoError;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Kitchen order {0} not found")]
    OrderNotFound(i64),

    #[error("Menu item {0} not found")]
    MenuItemNotFound(i64),

    #[error("Inventory item {0} not found")]
    InventoryItemNotFound(i64),

    #[error("Menu item '{name}' is not available")]
    ItemUnavailable { id: i64, name: String },

    #[error("Invalid status transition: {from} → {to}. Allowed flow: {}", ALLOWED_FLOW)]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("{message}")]
    Validation { code: ErrorCode, message: String },

    #[error(transparent)]
    Database(#[from] RepoError),
}

impl OrderError {
    pub fn validation(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Validation {
            code,
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for OrderError {
    fn from(err: sqlx::Error) -> Self {
        OrderError::Database(err.into())
    }
}

pub type OrderResult<T> = Result<T, OrderError>;

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        let message = err.to_string();
        match err {
            OrderError::OrderNotFound(id) => {
                AppError::with_message(ErrorCode::OrderNotFound, message).with_detail("orderId", id)
            }
            OrderError::MenuItemNotFound(id) => {
                AppError::with_message(ErrorCode::MenuItemNotFound, message)
                    .with_detail("menuItemId", id)
            }
            OrderError::InventoryItemNotFound(id) => {
                AppError::with_message(ErrorCode::InventoryItemNotFound, message)
                    .with_detail("itemId", id)
            }
            OrderError::ItemUnavailable { id, .. } => {
                AppError::with_message(ErrorCode::MenuItemUnavailable, message)
                    .with_detail("menuItemId", id)
            }
            OrderError::InvalidTransition { from, to } => {
                AppError::with_message(ErrorCode::InvalidStatusTransition, message)
                    .with_detail("from", from.as_str())
                    .with_detail("to", to.as_str())
            }
            OrderError::Validation { code, .. } => AppError::with_message(code, message),
            OrderError::Database(e) => e.into(),
        }
    }
}
