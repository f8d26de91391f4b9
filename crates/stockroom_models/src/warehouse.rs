//! Warehouses and the lots stored in them.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use stockroom_query::Searchable;
use stockroom_query::table::Tabular;

/// A physical warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// City the warehouse is located in.
    pub city: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Person in charge, if assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
}

impl Warehouse {
    /// Creates a warehouse with no address or manager.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            city: city.into(),
            address: String::new(),
            manager: None,
        }
    }

    /// Sets the street address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the manager.
    #[must_use]
    pub fn with_manager(mut self, manager: impl Into<String>) -> Self {
        self.manager = Some(manager.into());
        self
    }
}

impl Searchable for Warehouse {
    fn search_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "id" => Some(Cow::Borrowed(&self.id)),
            "name" => Some(Cow::Borrowed(&self.name)),
            "city" => Some(Cow::Borrowed(&self.city)),
            "address" => Some(Cow::Borrowed(&self.address)),
            "manager" => self.manager.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }
}

impl Tabular for Warehouse {
    fn cell(&self, key: &str) -> String {
        self.field(key).map(Cow::into_owned).unwrap_or_default()
    }
}

/// A lot of one product stored in a warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLot {
    /// Stable identifier.
    pub id: String,
    /// Warehouse holding the lot.
    pub warehouse_id: String,
    /// Catalog product of the lot.
    pub product_id: String,
    /// Product name, denormalized for display.
    pub product_name: String,
    /// Manufacturer lot number.
    pub lot_number: String,
    /// Units on hand.
    pub quantity: u32,
    /// Expiry date (`YYYY-MM-DD`), if the product expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<String>,
}

impl Searchable for StockLot {
    fn search_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.product_name)
    }

    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "id" => Some(Cow::Borrowed(&self.id)),
            "warehouseId" => Some(Cow::Borrowed(&self.warehouse_id)),
            "productId" => Some(Cow::Borrowed(&self.product_id)),
            "productName" => Some(Cow::Borrowed(&self.product_name)),
            "lotNumber" => Some(Cow::Borrowed(&self.lot_number)),
            "quantity" => Some(Cow::Owned(self.quantity.to_string())),
            "expiresOn" => self.expires_on.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }
}

impl Tabular for StockLot {
    fn cell(&self, key: &str) -> String {
        self.field(key).map(Cow::into_owned).unwrap_or_default()
    }
}
