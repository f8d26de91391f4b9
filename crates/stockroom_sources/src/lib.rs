//! Inventory sources for Stockroom.
//!
//! Each source implements [`InventorySource`](stockroom_resources::InventorySource)
//! and is chosen once at startup from [`SourceConfig`]; nothing past that point
//! knows which one is in use.
//!
//! # Supported Sources
//!
//! | Source | [`SourceKind`] | Description |
//! |--------|----------------|-------------|
//! | [`MockSource`] | `mock` (default) | Built-in fixtures, optional latency and scripted failures |
//! | [`HttpSource`] | `http` | JSON endpoints under a base URL, optional bearer token |
//!
//! # Usage
//!
//! ```no_run
//! use stockroom_resources::InventoryStore;
//! use stockroom_sources::SourceConfig;
//!
//! # fn main() -> Result<(), stockroom_sources::ConfigError> {
//! let source = SourceConfig::from_env()?.build()?;
//! let store = InventoryStore::new(source);
//! # Ok(())
//! # }
//! ```
//!
//! # Environment
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `STOCKROOM_SOURCE` | `mock` or `http` | `mock` |
//! | `STOCKROOM_API_URL` | Base URL of the HTTP API | required for `http` |
//! | `STOCKROOM_API_TOKEN` | Bearer token | none |
//! | `STOCKROOM_TIMEOUT_SECS` | HTTP request timeout | `30` |
//! | `STOCKROOM_MOCK_LATENCY_MS` | Artificial mock latency | `0` |

mod config;
pub mod http;
pub mod mock;

pub use config::{
    ConfigError, ENV_API_TOKEN, ENV_API_URL, ENV_MOCK_LATENCY_MS, ENV_SOURCE, ENV_TIMEOUT_SECS,
    SourceConfig, SourceKind,
};
pub use http::HttpSource;
pub use mock::{Endpoint, MockSource};
