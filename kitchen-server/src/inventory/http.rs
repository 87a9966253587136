//! HTTP inventory gateway (reqwest)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::models::{InventoryDeductionRequest, InventoryItem};

use super::{DeductOutcome, GatewayError, InventoryGateway};

/// Talks to the inventory service under `{base_url}/api/inventory`
#[derive(Debug, Clone)]
pub struct HttpInventoryGateway {
    client: Client,
    base_url: String,
}

impl HttpInventoryGateway {
    /// Every request shares `timeout`, so an unreachable service delays an
    /// order by at most that long.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/inventory{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, GatewayError> {
        let response = self.client.get(self.url(path)).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status));
        }
        Ok(response.json().await?)
    }

    async fn post_deduct(&self, requests: &[InventoryDeductionRequest]) -> Result<(), GatewayError> {
        let response = self
            .client
            .post(self.url("/deduct"))
            .json(requests)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status));
        }
        Ok(())
    }
}

#[async_trait]
impl InventoryGateway for HttpInventoryGateway {
    async fn deduct(&self, requests: &[InventoryDeductionRequest]) -> DeductOutcome {
        if requests.is_empty() {
            return DeductOutcome::NotAttempted;
        }
        match self.post_deduct(requests).await {
            Ok(()) => {
                tracing::info!(count = requests.len(), "Inventory deducted");
                DeductOutcome::Delivered
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    count = requests.len(),
                    "Failed to reach inventory service, order proceeds without deduction"
                );
                DeductOutcome::TransportFailed {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn list_items(&self) -> Vec<InventoryItem> {
        self.get_json("", &[]).await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to fetch inventory items");
            Vec::new()
        })
    }

    async fn get_item(&self, id: i64) -> Option<InventoryItem> {
        match self.get_json(&format!("/{id}"), &[]).await {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(error = %e, item_id = id, "Failed to fetch inventory item");
                None
            }
        }
    }

    async fn check_stock(&self, item_name: &str, quantity: i32) -> bool {
        let query = [
            ("itemName", item_name.to_string()),
            ("quantity", quantity.to_string()),
        ];
        self.get_json("/check-stock", &query)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(
                    error = %e,
                    item_name = %item_name,
                    "Stock check failed, assuming item is in stock"
                );
                true
            })
    }
}
