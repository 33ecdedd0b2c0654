use inventrent_core::{DomainResult, Entity, ItemId};

/// A single stock record.
///
/// Fields are private so the id can only be set through validation; stock is
/// the one field the store mutates after insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ItemId,
    name: String,
    stock: i64,
    unit: String,
    price: f64,
    supplier: String,
    low_stock_threshold: i64,
}

impl Item {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    pub fn low_stock_threshold(&self) -> i64 {
        self.low_stock_threshold
    }

    /// Stock value of this item: `stock × price`.
    pub fn amount(&self) -> f64 {
        self.stock as f64 * self.price
    }

    /// Strictly below threshold; `stock == threshold` is adequately stocked.
    pub fn is_low_stock(&self) -> bool {
        self.stock < self.low_stock_threshold
    }

    pub(crate) fn set_stock(&mut self, stock: i64) {
        self.stock = stock;
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Unvalidated item fields, as entered at the menu or read from a file row.
///
/// Stock and price signs are not checked; only the id is validated when the
/// draft becomes an [`Item`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub id: i64,
    pub name: String,
    pub stock: i64,
    pub unit: String,
    pub price: f64,
    pub supplier: String,
    pub low_stock_threshold: i64,
}

impl NewItem {
    pub fn into_item(self) -> DomainResult<Item> {
        let id = ItemId::new(self.id)?;
        Ok(Item {
            id,
            name: self.name,
            stock: self.stock,
            unit: self.unit,
            price: self.price,
            supplier: self.supplier,
            low_stock_threshold: self.low_stock_threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventrent_core::DomainError;

    fn draft(id: i64, stock: i64, price: f64, threshold: i64) -> NewItem {
        NewItem {
            id,
            name: "Rice".to_string(),
            stock,
            unit: "kg".to_string(),
            price,
            supplier: "Acme".to_string(),
            low_stock_threshold: threshold,
        }
    }

    #[test]
    fn into_item_validates_id() {
        let err = draft(0, 1, 1.0, 1).into_item().unwrap_err();
        assert_eq!(err, DomainError::InvalidKey("0".to_string()));

        let item = draft(7, 1, 1.0, 1).into_item().unwrap();
        assert_eq!(item.id().get(), 7);
    }

    #[test]
    fn amount_is_stock_times_price() {
        let item = draft(1, 10, 2.5, 0).into_item().unwrap();
        assert_eq!(item.amount(), 25.0);
    }

    #[test]
    fn low_stock_is_strictly_below_threshold() {
        assert!(!draft(1, 10, 1.0, 10).into_item().unwrap().is_low_stock());
        assert!(draft(1, 9, 1.0, 10).into_item().unwrap().is_low_stock());
    }

    #[test]
    fn negative_stock_and_price_are_accepted() {
        let item = draft(1, -5, -2.0, 0).into_item().unwrap();
        assert_eq!(item.stock(), -5);
        assert_eq!(item.price(), -2.0);
        assert_eq!(item.amount(), 10.0);
    }
}
