//! Persisted warehouse filters and the selector applying them.

use serde::{Deserialize, Serialize};
use stockroom_models::Warehouse;

/// Filters kept alongside the warehouse list.
///
/// Independent of fetch status: setting filters never triggers a fetch or a
/// recomputation. Consumers derive the filtered list with [`select_filtered`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseFilters {
    /// Required city; empty means any.
    pub city: String,
    /// Required warehouse name; empty means any.
    pub warehouse_name: String,
}

impl WarehouseFilters {
    /// Overwrites the fields present in `patch`.
    pub fn merge(&mut self, patch: WarehouseFilterPatch) {
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(name) = patch.warehouse_name {
            self.warehouse_name = name;
        }
    }

    /// Returns `true` when no field constrains the list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.city.is_empty() && self.warehouse_name.is_empty()
    }

    /// Exact, case-sensitive match on every non-empty field.
    #[must_use]
    pub fn matches(&self, warehouse: &Warehouse) -> bool {
        (self.city.is_empty() || warehouse.city == self.city)
            && (self.warehouse_name.is_empty() || warehouse.name == self.warehouse_name)
    }
}

/// Partial update for [`WarehouseFilters`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarehouseFilterPatch {
    /// New city, if changing.
    pub city: Option<String>,
    /// New warehouse name, if changing.
    pub warehouse_name: Option<String>,
}

impl WarehouseFilterPatch {
    /// An empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the city.
    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the warehouse name.
    #[must_use]
    pub fn warehouse_name(mut self, name: impl Into<String>) -> Self {
        self.warehouse_name = Some(name.into());
        self
    }
}

/// Warehouses in `payload` matching `filters`, in their original order.
#[must_use]
pub fn select_filtered(payload: &[Warehouse], filters: &WarehouseFilters) -> Vec<Warehouse> {
    payload
        .iter()
        .filter(|warehouse| filters.matches(warehouse))
        .cloned()
        .collect()
}
