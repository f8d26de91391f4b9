//! The application's resource store.

use crate::envelope::Envelope;
use crate::filters::{WarehouseFilterPatch, WarehouseFilters, select_filtered};
use crate::resource::{Resource, ResourceMap};
use crate::source::InventorySource;
use crate::status::FetchOutcome;
use parking_lot::RwLock;
use std::sync::Arc;
use stockroom_models::{Product, StockLot, Warehouse};

/// Store for every remote resource the console shows.
///
/// Construct one per application (or per test) and share it behind an `Arc`.
/// All methods take `&self`; mutation happens only through the fetch methods
/// and the filter setters.
///
/// | Resource | Accessor | Keyed |
/// |----------|----------|-------|
/// | Warehouse list | [`warehouses()`](Self::warehouses) | no |
/// | Lots per warehouse | [`warehouse_lots()`](Self::warehouse_lots) | by warehouse id |
/// | Product catalog | [`products()`](Self::products) | no |
pub struct InventoryStore {
    source: Arc<dyn InventorySource>,
    warehouses: Resource<Vec<Warehouse>>,
    warehouse_lots: ResourceMap<String, Vec<StockLot>>,
    products: Resource<Vec<Product>>,
    warehouse_filters: RwLock<WarehouseFilters>,
}

impl InventoryStore {
    /// Creates a store fetching from `source`.
    #[must_use]
    pub fn new(source: Arc<dyn InventorySource>) -> Self {
        Self {
            source,
            warehouses: Resource::new("warehouses"),
            warehouse_lots: ResourceMap::new("warehouse_lots"),
            products: Resource::new("products"),
            warehouse_filters: RwLock::new(WarehouseFilters::default()),
        }
    }

    /// Fetches the warehouse list.
    pub async fn fetch_warehouses(&self) -> FetchOutcome {
        self.warehouses
            .fetch(async {
                self.source
                    .list_warehouses()
                    .await
                    .and_then(Envelope::into_result)
            })
            .await
    }

    /// Fetches the lots stored in `warehouse_id`.
    pub async fn fetch_warehouse_lots(&self, warehouse_id: &str) -> FetchOutcome {
        self.warehouse_lots
            .fetch(warehouse_id.to_string(), async {
                self.source
                    .warehouse_lots(warehouse_id)
                    .await
                    .and_then(Envelope::into_result)
            })
            .await
    }

    /// Fetches the product catalog.
    pub async fn fetch_products(&self) -> FetchOutcome {
        self.products
            .fetch(async {
                self.source
                    .list_products()
                    .await
                    .and_then(Envelope::into_result)
            })
            .await
    }

    /// The warehouse list resource.
    #[must_use]
    pub fn warehouses(&self) -> &Resource<Vec<Warehouse>> {
        &self.warehouses
    }

    /// The per-warehouse lot resources.
    #[must_use]
    pub fn warehouse_lots(&self) -> &ResourceMap<String, Vec<StockLot>> {
        &self.warehouse_lots
    }

    /// The product catalog resource.
    #[must_use]
    pub fn products(&self) -> &Resource<Vec<Product>> {
        &self.products
    }

    /// Merges `patch` into the warehouse filters.
    pub fn set_filters(&self, patch: WarehouseFilterPatch) {
        let mut filters = self.warehouse_filters.write();
        filters.merge(patch);
        tracing::debug!(city = %filters.city, warehouse_name = %filters.warehouse_name, "warehouse filters updated");
    }

    /// Resets the warehouse filters to empty values.
    pub fn clear_filters(&self) {
        *self.warehouse_filters.write() = WarehouseFilters::default();
        tracing::debug!("warehouse filters cleared");
    }

    /// Current warehouse filters.
    #[must_use]
    pub fn filters(&self) -> WarehouseFilters {
        self.warehouse_filters.read().clone()
    }

    /// The fetched warehouses matching the current filters.
    ///
    /// Empty while nothing has been fetched successfully.
    #[must_use]
    pub fn filtered_warehouses(&self) -> Vec<Warehouse> {
        let filters = self.filters();
        self.warehouses.with_state(|state| {
            state
                .payload
                .as_deref()
                .map(|payload| select_filtered(payload, &filters))
                .unwrap_or_default()
        })
    }
}

impl core::fmt::Debug for InventoryStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InventoryStore")
            .field("warehouses", &self.warehouses)
            .field("warehouse_lots", &self.warehouse_lots)
            .field("products", &self.products)
            .field("warehouse_filters", &*self.warehouse_filters.read())
            .finish_non_exhaustive()
    }
}
