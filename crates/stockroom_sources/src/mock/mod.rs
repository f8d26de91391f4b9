//! Fixture-backed inventory source.
//!
//! Useful for demos and tests: responses come from memory, optionally after a
//! fixed delay, and any endpoint can be made to fail with a server message.

mod fixtures;

use async_trait::async_trait;
use core::time::Duration;
use parking_lot::Mutex;
use std::collections::HashMap;
use stockroom_models::{Product, StockLot, Warehouse};
use stockroom_resources::{Envelope, FetchError, InventorySource};

/// An endpoint of [`InventorySource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// [`InventorySource::list_warehouses`].
    Warehouses,
    /// [`InventorySource::warehouse_lots`].
    WarehouseLots,
    /// [`InventorySource::list_products`].
    Products,
}

/// In-memory [`InventorySource`].
///
/// ```
/// use stockroom_sources::{Endpoint, MockSource};
///
/// let source = MockSource::with_fixtures();
/// source.fail(Endpoint::Products, "catalog offline");
/// ```
pub struct MockSource {
    warehouses: Vec<Warehouse>,
    lots: Vec<StockLot>,
    products: Vec<Product>,
    latency: Duration,
    failures: Mutex<HashMap<Endpoint, String>>,
}

impl MockSource {
    /// Creates a source serving the given records.
    #[must_use]
    pub fn new(warehouses: Vec<Warehouse>, lots: Vec<StockLot>, products: Vec<Product>) -> Self {
        Self {
            warehouses,
            lots,
            products,
            latency: Duration::ZERO,
            failures: Mutex::new(HashMap::new()),
        }
    }

    /// Creates a source serving the built-in fixtures.
    #[must_use]
    pub fn with_fixtures() -> Self {
        Self::new(fixtures::warehouses(), fixtures::lots(), fixtures::products())
    }

    /// Delays every response by `latency`.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Makes `endpoint` answer with a failed envelope carrying `message`
    /// until [`recover`](Self::recover) is called.
    pub fn fail(&self, endpoint: Endpoint, message: impl Into<String>) {
        self.failures.lock().insert(endpoint, message.into());
    }

    /// Makes `endpoint` succeed again.
    pub fn recover(&self, endpoint: Endpoint) {
        self.failures.lock().remove(&endpoint);
    }

    async fn respond<T: Send>(
        &self,
        endpoint: Endpoint,
        payload: T,
    ) -> Result<Envelope<T>, FetchError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let failure = self.failures.lock().get(&endpoint).cloned();
        match failure {
            Some(message) => {
                tracing::debug!(?endpoint, %message, "mock failure");
                Ok(Envelope::failure(message))
            }
            None => Ok(Envelope::ok(payload)),
        }
    }
}

#[async_trait]
impl InventorySource for MockSource {
    async fn list_warehouses(&self) -> Result<Envelope<Vec<Warehouse>>, FetchError> {
        self.respond(Endpoint::Warehouses, self.warehouses.clone())
            .await
    }

    async fn warehouse_lots(
        &self,
        warehouse_id: &str,
    ) -> Result<Envelope<Vec<StockLot>>, FetchError> {
        let lots = self
            .lots
            .iter()
            .filter(|lot| lot.warehouse_id == warehouse_id)
            .cloned()
            .collect();
        self.respond(Endpoint::WarehouseLots, lots).await
    }

    async fn list_products(&self) -> Result<Envelope<Vec<Product>>, FetchError> {
        self.respond(Endpoint::Products, self.products.clone()).await
    }
}

impl core::fmt::Debug for MockSource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MockSource")
            .field("warehouses", &self.warehouses.len())
            .field("lots", &self.lots.len())
            .field("products", &self.products.len())
            .field("latency", &self.latency)
            .field("failures", &*self.failures.lock())
            .finish()
    }
}
