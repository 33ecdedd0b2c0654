//! Read-only views produced by the inventory store.

use crate::item::Item;

/// One entry of the low-stock report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowStock<'a> {
    pub item: &'a Item,
    pub current_stock: i64,
}

/// One item with its computed amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryLine<'a> {
    pub item: &'a Item,
    pub amount: f64,
}

/// Per-item amounts in insertion order, plus the grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<'a> {
    pub lines: Vec<SummaryLine<'a>>,
    pub total: f64,
}
