//! Tabular projection of items.
//!
//! The external file is a single table; this module fixes its column order
//! and the conversion between a row and an item.

use inventrent_core::Entity;

use crate::item::{Item, NewItem};

/// Header row of the persisted table, in column order.
pub const COLUMN_HEADINGS: [&str; 7] = [
    "Item ID",
    "Item Name",
    "Stock",
    "Unit",
    "Price",
    "Supplier",
    "Low Stock Threshold",
];

/// One data row: `(id, name, stock, unit, price, supplier, threshold)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub id: i64,
    pub name: String,
    pub stock: i64,
    pub unit: String,
    pub price: f64,
    pub supplier: String,
    pub low_stock_threshold: i64,
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        Self {
            id: i64::from(*item.id()),
            name: item.name().to_string(),
            stock: item.stock(),
            unit: item.unit().to_string(),
            price: item.price(),
            supplier: item.supplier().to_string(),
            low_stock_threshold: item.low_stock_threshold(),
        }
    }
}

impl From<ItemRow> for NewItem {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            stock: row.stock,
            unit: row.unit,
            price: row.price,
            supplier: row.supplier,
            low_stock_threshold: row.low_stock_threshold,
        }
    }
}
