//! Core infrastructure for Stockroom.
//!
//! Currently this is the logging setup: [`TracingConfig`] installs a global
//! `tracing` subscriber once per process.
//!
//! ```
//! use stockroom_core::{TracingConfig, TracingFormat};
//! use tracing::Level;
//!
//! TracingConfig::new()
//!     .with_level(Level::DEBUG)
//!     .with_format(TracingFormat::Compact)
//!     .init();
//! ```

mod tracing_setup;

pub use tracing_setup::{
    ENV_LOG, ENV_LOG_FORMAT, TracingConfig, TracingFormat, UnknownFormat,
};
