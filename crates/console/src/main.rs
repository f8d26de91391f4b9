//! Inventory console CLI.
//!
//! Lists warehouses, the lots of one warehouse, or the product catalog from
//! the source selected by `STOCKROOM_SOURCE`.
//!
//! # Usage
//!
//! ```bash
//! stockroom [SEARCH] [--city <CITY>]
//! stockroom [SEARCH] --lots <WAREHOUSE_ID>
//! stockroom [SEARCH] --products [--kind supply|drug]
//! ```
//!
//! # Example
//!
//! ```bash
//! STOCKROOM_SOURCE=mock stockroom bodega --city Quito
//! ```

use clap::Parser;
use console::{Cli, run};
use std::io::Write;
use std::process::ExitCode;
use stockroom_core::TracingConfig;
use stockroom_resources::InventoryStore;
use stockroom_sources::SourceConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match TracingConfig::from_env() {
        Ok(config) => {
            config.init();
        }
        Err(e) => {
            report(&format!("Error: {e}"));
            return ExitCode::FAILURE;
        }
    }

    let source = match SourceConfig::from_env().and_then(|config| config.build()) {
        Ok(source) => source,
        Err(e) => {
            report(&format!("Error: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let store = InventoryStore::new(source);
    match run(&cli, &store).await {
        Ok(text) => {
            let mut stdout = std::io::stdout().lock();
            if writeln!(stdout, "{text}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::warn!(resource = e.resource, "listing failed");
            report(&format!("Error: {e}"));
            ExitCode::FAILURE
        }
    }
}

fn report(message: &str) {
    let _ = writeln!(std::io::stderr().lock(), "{message}");
}
