//! Text rendering of items and reports.

use std::fmt::Write as _;

use colored::Colorize;

use inventrent_core::Entity;
use inventrent_inventory::{Inventory, Item};

const CURRENCY: &str = "Tk";

/// Render a float so whole numbers keep one decimal (`3.0`, not `3`).
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Multi-line description of one item, ending with a blank line.
pub fn item_card(item: &Item) -> String {
    format!(
        "Item ID: {id}\n\
         Item Name: {name}\n\
         Stock: {stock} {unit}\n\
         Price: {price} {CURRENCY} per {unit}\n\
         Supplier: {supplier}\n\
         Low Stock Threshold: {threshold}\n",
        id = item.id(),
        name = item.name(),
        stock = item.stock(),
        unit = item.unit(),
        price = format_number(item.price()),
        supplier = item.supplier(),
        threshold = item.low_stock_threshold(),
    )
}

/// Every item card in insertion order; empty for an empty inventory.
pub fn inventory_listing(inventory: &Inventory) -> String {
    inventory
        .iter()
        .map(item_card)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per low-stock item, or an all-clear message (also for an empty
/// inventory, which has nothing below its threshold).
pub fn low_stock_alerts(inventory: &Inventory) -> String {
    let report = inventory.low_stock_report();
    if report.is_empty() {
        return "All items have enough stock.".green().to_string();
    }

    report
        .iter()
        .map(|entry| {
            format!(
                "Item ID {} ({}) has low stock. Current stock: {} {}",
                entry.item.id(),
                entry.item.name(),
                entry.current_stock,
                entry.item.unit()
            )
            .yellow()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn summary(inventory: &Inventory) -> String {
    let summary = inventory.summary();
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Inventory Summary:".bold());
    let _ = writeln!(out, "=================");
    for line in &summary.lines {
        let _ = writeln!(out, "{}", item_card(line.item));
        let _ = writeln!(
            out,
            "Total amount for {}: {} {CURRENCY}",
            line.item.name(),
            format_number(line.amount)
        );
        let _ = writeln!(out, "-----------------");
    }
    let _ = write!(
        out,
        "Total inventory amount: {} {CURRENCY}",
        format_number(summary.total)
    );
    out
}
