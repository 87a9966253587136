use thiserror::Error;

use crate::inventory::GatewayError;
use crate::utils::AppError;

/// Errors that stop the server from starting or serving
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database initialization failed: {0}")]
    Database(#[from] AppError),

    #[error("Inventory gateway initialization failed: {0}")]
    Inventory(#[from] GatewayError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
