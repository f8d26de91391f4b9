//! Built-in inventory data for the mock source.

use stockroom_models::{Product, ProductDetails, StockLot, Warehouse};

pub(crate) fn warehouses() -> Vec<Warehouse> {
    vec![
        Warehouse::new("b1", "Bodega Central", "Quito")
            .with_address("Av. 10 de Agosto N24-55")
            .with_manager("Lucia Paredes"),
        Warehouse::new("b2", "Bodega Norte", "Quito").with_address("Av. Eloy Alfaro 3120"),
        Warehouse::new("b3", "Bodega Puerto", "Guayaquil")
            .with_address("Malecon 1401")
            .with_manager("Andres Mora"),
        Warehouse::new("b4", "Bodega Austral", "Cuenca").with_address("Calle Larga 7-18"),
    ]
}

pub(crate) fn products() -> Vec<Product> {
    vec![
        supply("p1", "Gauze pads", "Wound care", "box", Some("MedSur")),
        supply("p2", "Nitrile gloves", "Protection", "box", Some("Andes Health")),
        supply("p3", "Saline solution", "Fluids", "bag", None),
        drug("p4", "Paracetamol", "Analgesic", "paracetamol", "500 mg", "tablet", false),
        drug("p5", "Amoxicillin", "Antibiotic", "amoxicillin", "250 mg/5 ml", "suspension", true),
        drug("p6", "Ibuprofen", "Analgesic", "ibuprofen", "400 mg", "tablet", false),
    ]
}

pub(crate) fn lots() -> Vec<StockLot> {
    vec![
        lot("l1", "b1", "p1", "Gauze pads", "GZ-2401", 240, None),
        lot("l2", "b1", "p4", "Paracetamol", "PC-1187", 1200, Some("2027-03-31")),
        lot("l3", "b1", "p5", "Amoxicillin", "AX-0923", 80, Some("2026-12-15")),
        lot("l4", "b2", "p2", "Nitrile gloves", "NG-5510", 60, None),
        lot("l5", "b2", "p3", "Saline solution", "SS-0042", 120, Some("2028-01-01")),
        lot("l6", "b3", "p4", "Paracetamol", "PC-1190", 900, Some("2027-06-30")),
        lot("l7", "b3", "p6", "Ibuprofen", "IB-3307", 450, Some("2027-09-30")),
    ]
}

fn supply(id: &str, name: &str, category: &str, unit: &str, supplier: Option<&str>) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        category: category.into(),
        details: ProductDetails::Supply {
            unit: unit.into(),
            supplier: supplier.map(Into::into),
        },
    }
}

fn drug(
    id: &str,
    name: &str,
    category: &str,
    active_ingredient: &str,
    concentration: &str,
    presentation: &str,
    requires_prescription: bool,
) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        category: category.into(),
        details: ProductDetails::Drug {
            active_ingredient: active_ingredient.into(),
            concentration: concentration.into(),
            presentation: presentation.into(),
            requires_prescription,
        },
    }
}

fn lot(
    id: &str,
    warehouse_id: &str,
    product_id: &str,
    product_name: &str,
    lot_number: &str,
    quantity: u32,
    expires_on: Option<&str>,
) -> StockLot {
    StockLot {
        id: id.into(),
        warehouse_id: warehouse_id.into(),
        product_id: product_id.into(),
        product_name: product_name.into(),
        lot_number: lot_number.into(),
        quantity,
        expires_on: expires_on.map(Into::into),
    }
}
