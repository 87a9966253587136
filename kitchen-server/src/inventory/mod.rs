//! Inventory Gateway
//!
//! Outbound adapter to the external inventory service. Every call is
//! best-effort: failures are logged and degraded to a neutral value, never
//! surfaced to the caller as errors.
//!
//! | Operation | On failure |
//! |-----------|-----------|
//! | [`InventoryGateway::deduct`] | `DeductOutcome::TransportFailed` |
//! | [`InventoryGateway::list_items`] | empty list |
//! | [`InventoryGateway::get_item`] | `None` |
//! | [`InventoryGateway::check_stock`] | `true` (fail open) |

mod http;

pub use http::HttpInventoryGateway;

use async_trait::async_trait;
use shared::models::{InventoryDeductionRequest, InventoryItem};
use std::sync::Arc;
use thiserror::Error;

use crate::core::Config;

/// Result of a best-effort deduction call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeductOutcome {
    /// The inventory service accepted the request
    Delivered,
    /// The request could not be delivered (network, timeout, non-2xx)
    TransportFailed { reason: String },
    /// Nothing was sent (empty request list or gateway disabled)
    NotAttempted,
}

impl DeductOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeductOutcome::Delivered)
    }
}

/// Internal failure of a single inventory call
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

#[async_trait]
pub trait InventoryGateway: Send + Sync {
    /// Send one deduction per order line
    async fn deduct(&self, requests: &[InventoryDeductionRequest]) -> DeductOutcome;

    /// Display-only stock listing
    async fn list_items(&self) -> Vec<InventoryItem>;

    async fn get_item(&self, id: i64) -> Option<InventoryItem>;

    /// Whether `quantity` of `item_name` is in stock
    async fn check_stock(&self, item_name: &str, quantity: i32) -> bool;
}

/// Gateway used when no inventory service is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledInventoryGateway;

#[async_trait]
impl InventoryGateway for DisabledInventoryGateway {
    async fn deduct(&self, requests: &[InventoryDeductionRequest]) -> DeductOutcome {
        if !requests.is_empty() {
            tracing::debug!(
                count = requests.len(),
                "Inventory service not configured, skipping deduction"
            );
        }
        DeductOutcome::NotAttempted
    }

    async fn list_items(&self) -> Vec<InventoryItem> {
        Vec::new()
    }

    async fn get_item(&self, _id: i64) -> Option<InventoryItem> {
        None
    }

    async fn check_stock(&self, _item_name: &str, _quantity: i32) -> bool {
        true
    }
}

/// Build the gateway described by the configuration
pub fn from_config(config: &Config) -> Result<Arc<dyn InventoryGateway>, GatewayError> {
    match config.inventory_service_url.as_deref() {
        Some(url) => {
            tracing::info!(url = %url, timeout_ms = config.inventory_timeout_ms, "Inventory gateway enabled");
            Ok(Arc::new(HttpInventoryGateway::new(
                url,
                config.inventory_timeout(),
            )?))
        }
        None => {
            tracing::warn!("INVENTORY_SERVICE_URL not set, inventory deductions disabled");
            Ok(Arc::new(DisabledInventoryGateway))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_gateway_is_neutral() {
        let gateway = DisabledInventoryGateway;
        let req = vec![InventoryDeductionRequest {
            item_name: "Rice".into(),
            quantity: 1,
        }];
        assert_eq!(gateway.deduct(&req).await, DeductOutcome::NotAttempted);
        assert!(gateway.list_items().await.is_empty());
        assert!(gateway.get_item(1).await.is_none());
        assert!(gateway.check_stock("Rice", 100).await);
    }

    #[test]
    fn test_outcome_is_delivered() {
        assert!(DeductOutcome::Delivered.is_delivered());
        assert!(!DeductOutcome::NotAttempted.is_delivered());
        assert!(
            !DeductOutcome::TransportFailed {
                reason: "timeout".into()
            }
            .is_delivered()
        );
    }
}
