//! HTTP inventory source.
//!
//! Endpoints, relative to the configured base URL:
//!
//! - `GET warehouses`
//! - `GET warehouses/{id}/lots`
//! - `GET products`
//!
//! Every endpoint answers with an [`Envelope`](stockroom_resources::Envelope).

mod client;
mod source;

pub use client::ApiClient;
pub use source::HttpSource;
