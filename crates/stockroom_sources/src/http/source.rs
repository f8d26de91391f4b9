//! HTTP [`InventorySource`] implementation.

use super::client::ApiClient;
use crate::config::ConfigError;
use async_trait::async_trait;
use core::time::Duration;
use stockroom_models::{Product, StockLot, Warehouse};
use stockroom_resources::{Envelope, FetchError, InventorySource};

/// HTTP [`InventorySource`] implementation.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: ApiClient,
}

impl HttpSource {
    /// Creates a source talking to `base_url`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the URL is unusable or the client cannot
    /// be built.
    pub fn new(
        base_url: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            client: ApiClient::new(base_url, token, timeout)?,
        })
    }

    /// The underlying API client.
    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[async_trait]
impl InventorySource for HttpSource {
    async fn list_warehouses(&self) -> Result<Envelope<Vec<Warehouse>>, FetchError> {
        self.client.get(&["warehouses"]).await
    }

    async fn warehouse_lots(
        &self,
        warehouse_id: &str,
    ) -> Result<Envelope<Vec<StockLot>>, FetchError> {
        self.client
            .get(&["warehouses", warehouse_id, "lots"])
            .await
    }

    async fn list_products(&self) -> Result<Envelope<Vec<Product>>, FetchError> {
        self.client.get(&["products"]).await
    }
}
