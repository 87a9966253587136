//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::OrderNotFound
            | Self::MenuItemNotFound
            | Self::InventoryItemNotFound => StatusCode::NOT_FOUND,

            // 422 Unprocessable Entity (request is well-formed, catalog rejects it)
            Self::MenuItemUnavailable => StatusCode::UNPROCESSABLE_ENTITY,

            // 500 Internal Server Error
            Self::Unknown | Self::InternalError | Self::DatabaseError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (validation and lifecycle errors)
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::RequiredField
            | Self::InvalidStatusTransition
            | Self::OrderEmpty
            | Self::InvalidQuantity
            | Self::InvalidOrderStatus => StatusCode::BAD_REQUEST,
        }
    }
}
