//! Inventory console.
//!
//! Parses the command line, drives an [`InventoryStore`] and renders what it
//! holds as plain-text tables. `main.rs` only wires the environment in.

use clap::{Parser, ValueEnum};
use stockroom_models::ProductKind;
use stockroom_query::table::{Alignment, Column, TableModel, Tabular};
use stockroom_query::{FieldPredicate, QueryView, Searchable};
use stockroom_resources::{FetchOutcome, InventoryStore, WarehouseFilterPatch};

/// Command-line arguments.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "stockroom", bin_name = "stockroom")]
#[command(about = "Browse warehouses, lots and products", long_about = None)]
pub struct Cli {
    /// Case-insensitive search on the record name
    pub search: Option<String>,

    /// Only warehouses in this city (exact match)
    #[arg(long, conflicts_with_all = ["lots", "products"])]
    pub city: Option<String>,

    /// List the lots stored in this warehouse
    #[arg(long, value_name = "WAREHOUSE_ID", conflicts_with = "products")]
    pub lots: Option<String>,

    /// List the product catalog
    #[arg(long)]
    pub products: bool,

    /// Only products of this kind
    #[arg(long, value_enum, requires = "products")]
    pub kind: Option<KindArg>,
}

/// Product kind as accepted on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Supplies.
    Supply,
    /// Drugs.
    Drug,
}

impl From<KindArg> for ProductKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Supply => Self::Supply,
            KindArg::Drug => Self::Drug,
        }
    }
}

/// A fetch the console needed did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not load {resource}: {message}")]
pub struct ConsoleError {
    /// Which resource failed.
    pub resource: &'static str,
    /// The store's error message.
    pub message: String,
}

/// Runs the command described by `cli` against `store` and returns the text to print.
///
/// # Errors
///
/// Returns [`ConsoleError`] when the fetch backing the listing fails.
pub async fn run(cli: &Cli, store: &InventoryStore) -> Result<String, ConsoleError> {
    if let Some(warehouse_id) = &cli.lots {
        list_lots(cli, store, warehouse_id).await
    } else if cli.products {
        list_products(cli, store).await
    } else {
        list_warehouses(cli, store).await
    }
}

async fn list_warehouses(cli: &Cli, store: &InventoryStore) -> Result<String, ConsoleError> {
    settle("warehouses", store.fetch_warehouses().await)?;

    if let Some(city) = &cli.city {
        store.set_filters(WarehouseFilterPatch::new().city(city.clone()));
    }

    let model = TableModel::new(
        vec![
            Column::new("id", "ID"),
            Column::new("name", "Name"),
            Column::new("city", "City"),
            Column::new("address", "Address"),
            Column::new("manager", "Manager"),
        ],
        "No warehouses match.",
    );
    Ok(render(store.filtered_warehouses(), cli, &model))
}

async fn list_lots(
    cli: &Cli,
    store: &InventoryStore,
    warehouse_id: &str,
) -> Result<String, ConsoleError> {
    settle("lots", store.fetch_warehouse_lots(warehouse_id).await)?;

    let lots = store
        .warehouse_lots()
        .payload(&warehouse_id.to_string())
        .unwrap_or_default();

    let model = TableModel::new(
        vec![
            Column::new("lotNumber", "Lot"),
            Column::new("productName", "Product"),
            Column::new("quantity", "Qty").aligned(Alignment::Right),
            Column::new("expiresOn", "Expires"),
        ],
        format!("Warehouse {warehouse_id} holds no matching lots."),
    );
    Ok(render(lots, cli, &model))
}

async fn list_products(cli: &Cli, store: &InventoryStore) -> Result<String, ConsoleError> {
    settle("products", store.fetch_products().await)?;

    let mut view = QueryView::new(
        store.products().payload().unwrap_or_default(),
        FieldPredicate::new(),
    );
    if let Some(kind) = cli.kind {
        view.set_filter("type", ProductKind::from(kind).as_str());
    }
    if let Some(term) = &cli.search {
        view.set_search_term(term.clone());
    }

    let model = TableModel::new(
        vec![
            Column::new("id", "ID"),
            Column::new("name", "Name"),
            Column::new("category", "Category"),
            Column::new("type", "Type"),
        ],
        "No products match.",
    );
    Ok(model.render(view.filtered()).to_text())
}

fn render<T>(items: Vec<T>, cli: &Cli, model: &TableModel) -> String
where
    T: Searchable + Tabular + Clone + 'static,
{
    let mut view = QueryView::new(items, FieldPredicate::new());
    if let Some(term) = &cli.search {
        view.set_search_term(term.clone());
    }
    model.render(view.filtered()).to_text()
}

fn settle(resource: &'static str, outcome: FetchOutcome) -> Result<(), ConsoleError> {
    match outcome {
        FetchOutcome::Failed(message) => Err(ConsoleError { resource, message }),
        FetchOutcome::Succeeded | FetchOutcome::Superseded => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_and_city() {
        let cli = Cli::try_parse_from(["stockroom", "central", "--city", "Quito"]).unwrap();
        assert_eq!(cli.search.as_deref(), Some("central"));
        assert_eq!(cli.city.as_deref(), Some("Quito"));
        assert_eq!(cli.lots, None);
    }

    #[test]
    fn kind_requires_products() {
        assert!(Cli::try_parse_from(["stockroom", "--kind", "drug"]).is_err());
        let cli = Cli::try_parse_from(["stockroom", "--products", "--kind", "drug"]).unwrap();
        assert_eq!(cli.kind, Some(KindArg::Drug));
    }

    #[test]
    fn city_conflicts_with_lots() {
        assert!(Cli::try_parse_from(["stockroom", "--city", "Quito", "--lots", "b1"]).is_err());
    }

    #[test]
    fn superseded_is_not_an_error() {
        assert_eq!(settle("warehouses", FetchOutcome::Superseded), Ok(()));
        assert_eq!(
            settle("warehouses", FetchOutcome::Failed("boom".into()))
                .unwrap_err()
                .to_string(),
            "could not load warehouses: boom"
        );
    }
}
