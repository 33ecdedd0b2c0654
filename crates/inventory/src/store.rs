//! The inventory store.

use inventrent_core::{DomainError, DomainResult, Entity, ItemId};

use crate::item::{Item, NewItem};
use crate::report::{LowStock, Summary, SummaryLine};
use crate::row::ItemRow;

/// Ordered collection of items keyed by [`ItemId`].
///
/// # Invariants
/// - No two items share an id.
/// - Insertion order is preserved; deletion keeps the relative order of the rest.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<Item>,
    dirty: bool,
}

/// Result of loading rows: the populated inventory and every row that was
/// turned away by the add path, in row order.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub inventory: Inventory,
    pub rejected: Vec<DomainError>,
}

impl LoadReport {
    /// Add one row through the live add path, recording a rejection.
    pub fn push_row(&mut self, row: ItemRow) {
        if let Err(err) = self.inventory.add(NewItem::from(row)) {
            self.reject(err);
        }
    }

    /// Record a row turned away before it could become an [`ItemRow`].
    pub fn reject(&mut self, err: DomainError) {
        tracing::warn!(error = %err, "rejected row while loading inventory");
        self.rejected.push(err);
    }

    /// Mark the loaded state as the clean baseline.
    pub fn finish(mut self) -> Self {
        self.inventory.dirty = false;
        self
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory from table rows (header already skipped).
    ///
    /// Each row goes through [`Inventory::add`], so invalid and duplicate ids
    /// are rejected exactly as they would be at the menu. A rejected row does
    /// not stop the load.
    pub fn load<I>(rows: I) -> LoadReport
    where
        I: IntoIterator<Item = ItemRow>,
    {
        let mut report = LoadReport::default();
        for row in rows {
            report.push_row(row);
        }
        report.finish()
    }

    /// Project the inventory into table rows, in current order.
    ///
    /// Pair with [`crate::COLUMN_HEADINGS`] for the header row.
    pub fn save(&self) -> Vec<ItemRow> {
        self.items.iter().map(ItemRow::from).collect()
    }

    /// Append a new item.
    ///
    /// Fails without mutation on an invalid id, then on a duplicate id.
    pub fn add(&mut self, new_item: NewItem) -> DomainResult<&Item> {
        let item = new_item.into_item()?;
        let id = *item.id();
        if self.position(id).is_some() {
            return Err(DomainError::duplicate_key(id));
        }

        tracing::debug!(item_id = %id, "item added");
        self.items.push(item);
        self.dirty = true;
        Ok(&self.items[self.items.len() - 1])
    }

    /// Overwrite the stock of an existing item. The new value is not validated.
    pub fn update_stock(&mut self, id: ItemId, new_stock: i64) -> DomainResult<()> {
        let index = self.position(id).ok_or_else(DomainError::not_found)?;
        self.items[index].set_stock(new_stock);
        self.dirty = true;
        tracing::debug!(item_id = %id, new_stock, "stock updated");
        Ok(())
    }

    /// Remove an item and hand it back.
    pub fn delete(&mut self, id: ItemId) -> DomainResult<Item> {
        let index = self.position(id).ok_or_else(DomainError::not_found)?;
        let removed = self.items.remove(index);
        self.dirty = true;
        tracing::debug!(item_id = %id, "item deleted");
        Ok(removed)
    }

    pub fn find_by_id(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| *item.id() == id)
    }

    /// Case-insensitive exact match on the name; first match wins.
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        let wanted = name.to_lowercase();
        self.items
            .iter()
            .find(|item| item.name().to_lowercase() == wanted)
    }

    /// Items whose stock is strictly below their threshold, in insertion order.
    ///
    /// An empty report does not distinguish "no items" from "all stocked";
    /// check [`Inventory::is_empty`] for that.
    pub fn low_stock_report(&self) -> Vec<LowStock<'_>> {
        self.items
            .iter()
            .filter(|item| item.is_low_stock())
            .map(|item| LowStock {
                item,
                current_stock: item.stock(),
            })
            .collect()
    }

    pub fn total_amount(&self) -> f64 {
        self.items.iter().map(Item::amount).sum()
    }

    pub fn summary(&self) -> Summary<'_> {
        let lines = self
            .items
            .iter()
            .map(|item| SummaryLine {
                item,
                amount: item.amount(),
            })
            .collect();
        Summary {
            lines,
            total: self.total_amount(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether anything changed since the inventory was created or loaded.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| *item.id() == id)
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(id: i64, name: &str, stock: i64, price: f64, threshold: i64) -> NewItem {
        NewItem {
            id,
            name: name.to_string(),
            stock,
            unit: "kg".to_string(),
            price,
            supplier: "Acme".to_string(),
            low_stock_threshold: threshold,
        }
    }

    fn id(raw: i64) -> ItemId {
        ItemId::new(raw).unwrap()
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut inv = Inventory::new();
        inv.add(new_item(3, "Rice", 1, 1.0, 0)).unwrap();
        inv.add(new_item(1, "Salt", 1, 1.0, 0)).unwrap();
        inv.add(new_item(2, "Oil", 1, 1.0, 0)).unwrap();

        let ids: Vec<u64> = inv.iter().map(|i| i.id().get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert!(inv.is_dirty());
    }

    #[test]
    fn add_rejects_non_positive_id() {
        let mut inv = Inventory::new();
        let err = inv.add(new_item(0, "Rice", 1, 1.0, 0)).unwrap_err();
        assert_eq!(err, DomainError::InvalidKey("0".to_string()));
        let err = inv.add(new_item(-2, "Rice", 1, 1.0, 0)).unwrap_err();
        assert_eq!(err, DomainError::InvalidKey("-2".to_string()));
        assert!(inv.is_empty());
        assert!(!inv.is_dirty());
    }

    #[test]
    fn second_add_with_same_id_is_rejected_and_first_kept() {
        let mut inv = Inventory::new();
        inv.add(new_item(5, "Rice", 10, 2.0, 1)).unwrap();
        let err = inv.add(new_item(5, "Sugar", 99, 9.0, 1)).unwrap_err();

        assert_eq!(err, DomainError::DuplicateKey(id(5)));
        assert_eq!(inv.len(), 1);
        let kept = inv.find_by_id(id(5)).unwrap();
        assert_eq!(kept.name(), "Rice");
        assert_eq!(kept.stock(), 10);
    }

    #[test]
    fn update_stock_overwrites_without_validation() {
        let mut inv = Inventory::new();
        inv.add(new_item(1, "Rice", 10, 2.0, 1)).unwrap();

        inv.update_stock(id(1), 42).unwrap();
        assert_eq!(inv.find_by_id(id(1)).unwrap().stock(), 42);

        // Negative stock is accepted as-is.
        inv.update_stock(id(1), -7).unwrap();
        assert_eq!(inv.find_by_id(id(1)).unwrap().stock(), -7);
    }

    #[test]
    fn update_stock_unknown_id_is_not_found() {
        let mut inv = Inventory::new();
        assert_eq!(inv.update_stock(id(9), 1), Err(DomainError::NotFound));
    }

    #[test]
    fn delete_then_find_is_absent_and_order_kept() {
        let mut inv = Inventory::new();
        for raw in 1..=4 {
            inv.add(new_item(raw, &format!("item-{raw}"), 1, 1.0, 0)).unwrap();
        }

        let removed = inv.delete(id(3)).unwrap();
        assert_eq!(removed.name(), "item-3");
        assert!(inv.find_by_id(id(3)).is_none());

        let ids: Vec<u64> = inv.iter().map(|i| i.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 4]);

        assert_eq!(inv.delete(id(3)).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn find_by_name_is_case_insensitive_exact() {
        let mut inv = Inventory::new();
        inv.add(new_item(1, "rice", 1, 1.0, 0)).unwrap();
        inv.add(new_item(2, "RICE", 1, 1.0, 0)).unwrap();

        assert_eq!(inv.find_by_name("Rice").unwrap().id().get(), 1);
        assert!(inv.find_by_name("ric").is_none());
        assert!(inv.find_by_name("brown rice").is_none());
    }

    #[test]
    fn low_stock_boundary_is_strict() {
        let mut inv = Inventory::new();
        inv.add(new_item(1, "at-threshold", 10, 1.0, 10)).unwrap();
        inv.add(new_item(2, "below", 9, 1.0, 10)).unwrap();
        inv.add(new_item(3, "above", 11, 1.0, 10)).unwrap();

        let report = inv.low_stock_report();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].item.id().get(), 2);
        assert_eq!(report[0].current_stock, 9);
    }

    #[test]
    fn low_stock_report_empty_for_empty_inventory() {
        assert!(Inventory::new().low_stock_report().is_empty());
    }

    #[test]
    fn total_amount_sums_stock_times_price() {
        let mut inv = Inventory::new();
        assert_eq!(inv.total_amount(), 0.0);

        inv.add(new_item(1, "Rice", 10, 2.5, 0)).unwrap();
        inv.add(new_item(2, "Salt", 4, 1.0, 0)).unwrap();
        assert_eq!(inv.total_amount(), 29.0);
    }

    #[test]
    fn summary_pairs_items_with_amounts() {
        let mut inv = Inventory::new();
        inv.add(new_item(1, "Rice", 10, 2.5, 0)).unwrap();
        inv.add(new_item(2, "Salt", 4, 1.0, 0)).unwrap();

        let summary = inv.summary();
        let amounts: Vec<f64> = summary.lines.iter().map(|l| l.amount).collect();
        assert_eq!(amounts, vec![25.0, 4.0]);
        assert_eq!(summary.total, 29.0);
    }

    #[test]
    fn load_rejects_bad_rows_through_add_path() {
        let rows = vec![
            ItemRow::from(&new_item(1, "Rice", 5, 1.0, 2).into_item().unwrap()),
            ItemRow {
                id: -1,
                name: "Bad".to_string(),
                stock: 0,
                unit: "kg".to_string(),
                price: 0.0,
                supplier: String::new(),
                low_stock_threshold: 0,
            },
            ItemRow::from(&new_item(1, "Dup", 5, 1.0, 2).into_item().unwrap()),
        ];

        let report = Inventory::load(rows);
        assert_eq!(report.inventory.len(), 1);
        assert!(!report.inventory.is_dirty());
        assert_eq!(
            report.rejected,
            vec![
                DomainError::InvalidKey("-1".to_string()),
                DomainError::DuplicateKey(id(1)),
            ]
        );
    }

    #[test]
    fn load_of_no_rows_is_empty() {
        let report = Inventory::load(Vec::new());
        assert!(report.inventory.is_empty());
        assert!(report.rejected.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut inv = Inventory::new();
        inv.add(new_item(7, "Rice", 10, 2.5, 3)).unwrap();
        inv.add(new_item(2, "Salt", -4, 1.25, 8)).unwrap();

        let reloaded = Inventory::load(inv.save()).inventory;
        assert_eq!(reloaded.items(), inv.items());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::{HashMap, HashSet};

        fn arb_new_item(ids: std::ops::Range<i64>) -> impl Strategy<Value = NewItem> {
            (
                ids,
                "[A-Za-z][A-Za-z ]{0,15}",
                -50i64..500,
                "[a-z]{1,4}",
                0.0f64..1000.0,
                "[A-Za-z ]{0,12}",
                0i64..100,
            )
                .prop_map(|(id, name, stock, unit, price, supplier, threshold)| NewItem {
                    id,
                    name,
                    stock,
                    unit,
                    price,
                    supplier,
                    low_stock_threshold: threshold,
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: no sequence of adds produces two items with the same id,
            /// and the first accepted add for an id wins.
            #[test]
            fn adds_never_duplicate_ids(drafts in prop::collection::vec(arb_new_item(-5..20), 0..60)) {
                let mut inv = Inventory::new();
                let mut first_seen: HashMap<i64, NewItem> = HashMap::new();

                for draft in drafts {
                    let accepted = inv.add(draft.clone()).is_ok();
                    if draft.id > 0 && !first_seen.contains_key(&draft.id) {
                        prop_assert!(accepted);
                        first_seen.insert(draft.id, draft);
                    } else {
                        prop_assert!(!accepted);
                    }
                }

                let ids: HashSet<u64> = inv.iter().map(|i| i.id().get()).collect();
                prop_assert_eq!(ids.len(), inv.len());

                for item in inv.iter() {
                    let first = &first_seen[&(item.id().get() as i64)];
                    prop_assert_eq!(item.name(), first.name.as_str());
                    prop_assert_eq!(item.stock(), first.stock);
                }
            }

            /// Property: loading the saved rows reproduces the same items in order.
            #[test]
            fn load_of_save_is_identity(drafts in prop::collection::vec(arb_new_item(1..200), 1..40)) {
                let mut inv = Inventory::new();
                for draft in drafts {
                    let _ = inv.add(draft);
                }

                let report = Inventory::load(inv.save());
                prop_assert!(report.rejected.is_empty());
                prop_assert_eq!(report.inventory.items(), inv.items());
            }
        }
    }
}
