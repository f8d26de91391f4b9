//! Inventory console core: searchable list views and async resource state.
//!
//! [`QueryView`](stockroom_query::QueryView) keeps a search term and exact-match
//! filters in sync with an in-memory list. [`InventoryStore`](stockroom_resources::InventoryStore)
//! fetches warehouses, lots and products from an
//! [`InventorySource`](stockroom_resources::InventorySource), either the fixture-backed
//! `MockSource` or the HTTP client, and keeps the newest result of each fetch.

pub use stockroom_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use stockroom_internal::prelude::*;
}
