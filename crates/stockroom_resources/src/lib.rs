//! Asynchronous fetch state for Stockroom.
//!
//! Tracks, per remote resource, where the last request stands and what it
//! returned, decoupling consumers from the source that performs the request.
//!
//! # Overview
//!
//! - [`Resource`] - State machine for one resource: [`FetchStatus`], last good
//!   payload, last error. Out-of-order results are discarded.
//! - [`ResourceMap`] - Lazily created [`Resource`]s keyed by an identifier.
//! - [`InventoryStore`] - The application's resources (warehouses, lots per
//!   warehouse, products) plus the persisted warehouse filters.
//! - [`InventorySource`] - The fetch strategy the store calls. Implementations
//!   live in `stockroom_sources`.
//!
//! Failures never surface as `Err` from the store. They are folded into
//! [`FetchStatus::Failed`] and the resource's error message, while the last
//! successful payload stays readable.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use stockroom_resources::{FetchStatus, InventoryStore};
//!
//! let store = Arc::new(InventoryStore::new(source));
//! store.fetch_warehouses().await;
//!
//! match store.warehouses().status() {
//!     FetchStatus::Succeeded => render(store.filtered_warehouses()),
//!     FetchStatus::Failed => show_error(store.warehouses().error()),
//!     _ => show_spinner(),
//! }
//! ```

mod envelope;
mod error;
mod filters;
mod resource;
mod source;
mod status;
mod store;

pub use envelope::{DEFAULT_FAILURE_MESSAGE, Envelope};
pub use error::FetchError;
pub use filters::{WarehouseFilterPatch, WarehouseFilters, select_filtered};
pub use resource::{Resource, ResourceMap};
pub use source::InventorySource;
pub use status::{FetchOutcome, FetchStatus, ResourceState};
pub use store::InventoryStore;
