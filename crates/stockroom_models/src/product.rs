//! Catalog products and their subtypes.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use stockroom_query::Searchable;
use stockroom_query::table::Tabular;

/// Discriminator selecting a product subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    /// Medical or general supplies.
    Supply,
    /// Pharmaceuticals.
    Drug,
}

impl ProductKind {
    /// Wire name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProductKind::Supply => "supply",
            ProductKind::Drug => "drug",
        }
    }
}

impl core::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subtype-specific product attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ProductDetails {
    /// Supply attributes.
    Supply {
        /// Unit of measure (box, unit, roll, ...).
        unit: String,
        /// Usual supplier.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        supplier: Option<String>,
    },
    /// Drug attributes.
    Drug {
        /// Active ingredient.
        active_ingredient: String,
        /// Concentration, e.g. `500 mg`.
        concentration: String,
        /// Presentation, e.g. `tablet`.
        presentation: String,
        /// Whether dispensing requires a prescription.
        #[serde(default)]
        requires_prescription: bool,
    },
}

impl ProductDetails {
    /// The kind these details belong to.
    #[must_use]
    pub fn kind(&self) -> ProductKind {
        match self {
            ProductDetails::Supply { .. } => ProductKind::Supply,
            ProductDetails::Drug { .. } => ProductKind::Drug,
        }
    }

    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match (self, key) {
            (ProductDetails::Supply { unit, .. }, "unit") => Some(Cow::Borrowed(unit)),
            (ProductDetails::Supply { supplier, .. }, "supplier") => {
                supplier.as_deref().map(Cow::Borrowed)
            }
            (
                ProductDetails::Drug {
                    active_ingredient, ..
                },
                "activeIngredient",
            ) => Some(Cow::Borrowed(active_ingredient)),
            (ProductDetails::Drug { concentration, .. }, "concentration") => {
                Some(Cow::Borrowed(concentration))
            }
            (ProductDetails::Drug { presentation, .. }, "presentation") => {
                Some(Cow::Borrowed(presentation))
            }
            (
                ProductDetails::Drug {
                    requires_prescription,
                    ..
                },
                "requiresPrescription",
            ) => Some(Cow::Borrowed(if *requires_prescription {
                "true"
            } else {
                "false"
            })),
            _ => None,
        }
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Catalog category.
    pub category: String,
    /// Subtype attributes, tagged by `type` on the wire.
    #[serde(flatten)]
    pub details: ProductDetails,
}

impl Product {
    /// The product's subtype.
    #[must_use]
    pub fn kind(&self) -> ProductKind {
        self.details.kind()
    }
}

impl Searchable for Product {
    fn search_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "id" => Some(Cow::Borrowed(&self.id)),
            "name" => Some(Cow::Borrowed(&self.name)),
            "category" => Some(Cow::Borrowed(&self.category)),
            "type" => Some(Cow::Borrowed(self.kind().as_str())),
            other => self.details.field(other),
        }
    }
}

impl Tabular for Product {
    fn cell(&self, key: &str) -> String {
        self.field(key).map(Cow::into_owned).unwrap_or_default()
    }
}
