//! Repository Module
//!
//! Free async functions over the SQLite pool (or an open transaction),
//! one file per table family.

pub mod kitchen_order;
pub mod menu_item;

use shared::error::{AppError, ErrorCode};
use sqlx::{Sqlite, SqlitePool, Transaction};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound("Row not found".into()),
            other => RepoError::Database(other.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Open a write transaction that holds the SQLite write lock from the start
///
/// A deferred transaction that reads before it writes fails with
/// `SQLITE_BUSY_SNAPSHOT` under WAL when another writer commits in between,
/// and the busy timeout does not retry that case.
pub async fn begin_write(pool: &SqlitePool) -> RepoResult<Transaction<'static, Sqlite>> {
    Ok(pool.begin_with("BEGIN IMMEDIATE").await?)
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => {
                // Details stay in the log, the client only sees the code
                tracing::error!(error = %msg, "Repository database error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}
