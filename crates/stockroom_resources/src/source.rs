//! The [`InventorySource`] trait for fetch strategies.

use crate::envelope::Envelope;
use crate::error::FetchError;
use async_trait::async_trait;
use stockroom_models::{Product, StockLot, Warehouse};

/// Trait implemented by the backends the store fetches from.
///
/// `Err` is reserved for transport-level failures. A server that answers but
/// refuses the request returns an [`Envelope`] with `success: false`.
#[async_trait]
pub trait InventorySource: Send + Sync + 'static {
    /// Lists all warehouses.
    async fn list_warehouses(&self) -> Result<Envelope<Vec<Warehouse>>, FetchError>;

    /// Lists the lots stored in one warehouse.
    ///
    /// An unknown `warehouse_id` yields an empty list, not a failure.
    async fn warehouse_lots(
        &self,
        warehouse_id: &str,
    ) -> Result<Envelope<Vec<StockLot>>, FetchError>;

    /// Lists the product catalog.
    async fn list_products(&self) -> Result<Envelope<Vec<Product>>, FetchError>;
}
