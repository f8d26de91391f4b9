//! # Stockroom Internal Library
//!
//! Re-exports the Stockroom crates for convenience.

/// Logging setup.
pub use stockroom_core;

/// Layer 1: search and filter views over in-memory lists.
pub use stockroom_query;

/// Layer 1: inventory records and the product form contract.
pub use stockroom_models;

/// Layer 2: async fetch state and the inventory store.
pub use stockroom_resources;

/// Layer 3: mock and HTTP inventory sources.
pub use stockroom_sources;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use stockroom_core::{TracingConfig, TracingFormat};
    pub use stockroom_models::{
        FieldDescriptor, FormError, FormProps, Product, ProductDetails, ProductForm, ProductKind,
        StockLot, Warehouse,
    };
    pub use stockroom_query::table::{Alignment, Column, Table, TableModel, Tabular};
    pub use stockroom_query::{FieldPredicate, Filters, QueryPredicate, QueryView, Searchable};
    pub use stockroom_resources::{
        Envelope, FetchError, FetchOutcome, FetchStatus, InventorySource, InventoryStore,
        ResourceState, WarehouseFilterPatch, WarehouseFilters, select_filtered,
    };
    pub use stockroom_sources::{HttpSource, MockSource, SourceConfig, SourceKind};
}
