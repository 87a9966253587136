//! Unified error codes for the kitchen services
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Menu errors
//! - 7xxx: Inventory errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 on the wire so clients can switch on the number
/// without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,

    // ==================== 4xxx: Order ====================
    /// Kitchen order not found
    OrderNotFound = 4001,
    /// Status change not permitted by the order lifecycle
    InvalidStatusTransition = 4002,
    /// Order has no line items
    OrderEmpty = 4003,
    /// Line quantity must be positive
    InvalidQuantity = 4004,
    /// Unknown order status value
    InvalidOrderStatus = 4005,

    // ==================== 6xxx: Menu ====================
    /// Menu item not found
    MenuItemNotFound = 6001,
    /// Menu item exists but is not available
    MenuItemUnavailable = 6002,

    // ==================== 7xxx: Inventory ====================
    /// Inventory item not found (or inventory service unreachable)
    InventoryItemNotFound = 7001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field missing",

            ErrorCode::OrderNotFound => "Kitchen order not found",
            ErrorCode::InvalidStatusTransition => "Invalid status transition",
            ErrorCode::OrderEmpty => "Order must contain at least one item",
            ErrorCode::InvalidQuantity => "Quantity must be greater than zero",
            ErrorCode::InvalidOrderStatus => "Invalid order status",

            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::MenuItemUnavailable => "Menu item is not available",

            ErrorCode::InventoryItemNotFound => "Inventory item not found",

            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),

            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::InvalidStatusTransition),
            4003 => Ok(ErrorCode::OrderEmpty),
            4004 => Ok(ErrorCode::InvalidQuantity),
            4005 => Ok(ErrorCode::InvalidOrderStatus),

            6001 => Ok(ErrorCode::MenuItemNotFound),
            6002 => Ok(ErrorCode::MenuItemUnavailable),

            7001 => Ok(ErrorCode::InventoryItemNotFound),

            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::OrderNotFound.code(), 4001);
        assert_eq!(ErrorCode::InvalidStatusTransition.code(), 4002);
        assert_eq!(ErrorCode::MenuItemUnavailable.code(), 6002);
        assert_eq!(ErrorCode::InventoryItemNotFound.code(), 7001);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_every_code_survives_u16_conversion() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::Unknown,
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::InvalidRequest,
            ErrorCode::RequiredField,
            ErrorCode::OrderNotFound,
            ErrorCode::InvalidStatusTransition,
            ErrorCode::OrderEmpty,
            ErrorCode::InvalidQuantity,
            ErrorCode::InvalidOrderStatus,
            ErrorCode::MenuItemNotFound,
            ErrorCode::MenuItemUnavailable,
            ErrorCode::InventoryItemNotFound,
            ErrorCode::InternalError,
            ErrorCode::DatabaseError,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(4999), Err(InvalidErrorCode(4999)));
    }

    #[test]
    fn test_serialize_as_number() {
        assert_eq!(serde_json::to_string(&ErrorCode::OrderNotFound).unwrap(), "4001");
        let code: ErrorCode = serde_json::from_str("6002").unwrap();
        assert_eq!(code, ErrorCode::MenuItemUnavailable);
        assert!(serde_json::from_str::<ErrorCode>("10000").is_err());
    }

    #[test]
    fn test_display_and_message() {
        assert_eq!(format!("{}", ErrorCode::OrderNotFound), "4001");
        assert_eq!(ErrorCode::NotFound.message(), "Resource not found");
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
    }
}
