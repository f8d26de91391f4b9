//! Records shared across Stockroom.
//!
//! These are the payloads the inventory sources return and the items shown in
//! query views:
//!
//! - [`Warehouse`] and the [`StockLot`]s stored in it
//! - Catalog [`Product`]s, whose [`ProductDetails`] vary by [`ProductKind`]
//! - The [`form`] contract for editing a product of a given kind
//!
//! All records serialize with camelCase field names and implement
//! [`Searchable`](stockroom_query::Searchable) and
//! [`Tabular`](stockroom_query::table::Tabular).

pub mod form;
mod product;
mod warehouse;

pub use form::{FieldDescriptor, FormError, FormProps, ProductForm};
pub use product::{Product, ProductDetails, ProductKind};
pub use warehouse::{StockLot, Warehouse};
