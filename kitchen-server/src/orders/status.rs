//! Order lifecycle
//!
//! ```text
//! PENDING → COOKING → READY → SERVED (terminal)
//! ```
//!
//! Self-transitions, skips, reversals and anything out of SERVED are
//! rejected.

use shared::models::OrderStatus;

/// Every permitted `(from, to)` pair
pub const ALLOWED_TRANSITIONS: &[(OrderStatus, OrderStatus)] = &[
    (OrderStatus::Pending, OrderStatus::Cooking),
    (OrderStatus::Cooking, OrderStatus::Ready),
    (OrderStatus::Ready, OrderStatus::Served),
];

/// Human-readable flow, used in rejection messages
pub const ALLOWED_FLOW: &str = "PENDING → COOKING → READY → SERVED";

pub fn can_transition(from: OrderStatus, to: OrderStatus) -> bool {
    ALLOWED_TRANSITIONS.contains(&(from, to))
}

/// Statuses reachable from `from` in one step
pub fn next_statuses(from: OrderStatus) -> impl Iterator<Item = OrderStatus> {
    ALLOWED_TRANSITIONS
        .iter()
        .filter(move |(f, _)| *f == from)
        .map(|(_, to)| *to)
}

pub fn is_terminal(status: OrderStatus) -> bool {
    next_statuses(status).next().is_none()
}
