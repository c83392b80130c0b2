// SPDX-License-Identifier: MPL-2.0
//! In-memory cart ledger.
//!
//! The ledger is an ordered list of line items keyed by product name.
//! Adding merges into an existing line item; removal always drops the
//! whole line item. Totals are derived on demand and the view rebuilds
//! the itemized list from ledger order on every render. Nothing here is
//! persisted; a relaunch starts with an empty cart.

pub mod quantity;

pub use quantity::PendingQuantity;

use crate::catalog::{Price, Product};

/// One cart entry: a product name with its unit price and quantity.
///
/// Invariant: `quantity >= 1`. A line item whose quantity would reach
/// zero is removed from the ledger instead of being kept around empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    name: String,
    unit_price: Price,
    quantity: u32,
}

impl LineItem {
    /// Returns the product name keying this entry.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    #[must_use]
    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Returns the quantity (always at least 1).
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns `unit_price × quantity`.
    #[must_use]
    pub fn row_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// Ordered collection of cart line items; insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartLedger {
    items: Vec<LineItem>,
}

impl CartLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `product` to the ledger.
    ///
    /// A zero quantity is a safe no-op. An existing line item with the
    /// same name is incremented; otherwise a new line item is appended,
    /// so the ledger never holds two entries for one name.
    pub fn add_items(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.name == product.name) {
            item.quantity = item.quantity.saturating_add(quantity);
        } else {
            self.items.push(LineItem {
                name: product.name.clone(),
                unit_price: product.price,
                quantity,
            });
        }
    }

    /// Removes the line item with the given name, if any.
    ///
    /// Removal is whole-item: the entry disappears regardless of its
    /// quantity. Removing an absent name leaves the ledger unchanged.
    pub fn remove_item(&mut self, name: &str) {
        self.items.retain(|item| item.name != name);
    }

    /// Returns the line items in display order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of all line item quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |sum, item| sum.saturating_add(item.quantity))
    }

    /// Sum of all row totals.
    #[must_use]
    pub fn total_price(&self) -> Price {
        Price::from_cents(
            self.items
                .iter()
                .fold(0, |sum: u64, item| sum.saturating_add(item.row_total().cents())),
        )
    }

    /// Returns true when the ledger holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sneakers() -> Product {
        Product {
            name: "Fall Limited Edition Sneakers".into(),
            price: Price::from_cents(12_500),
            original_price: Price::from_cents(25_000),
        }
    }

    fn other_product() -> Product {
        Product {
            name: "Winter Boots".into(),
            price: Price::from_cents(9_900),
            original_price: Price::from_cents(9_900),
        }
    }

    #[test]
    fn new_ledger_is_empty() {
        let ledger = CartLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_quantity(), 0);
        assert_eq!(ledger.total_price(), Price::from_cents(0));
    }

    #[test]
    fn add_zero_quantity_is_a_no_op() {
        let mut ledger = CartLedger::new();
        ledger.add_items(&sneakers(), 0);
        assert!(ledger.is_empty());

        ledger.add_items(&sneakers(), 2);
        ledger.add_items(&sneakers(), 0);
        assert_eq!(ledger.items().len(), 1);
        assert_eq!(ledger.items()[0].quantity(), 2);
    }

    #[test]
    fn add_appends_new_line_item() {
        let mut ledger = CartLedger::new();
        ledger.add_items(&sneakers(), 3);

        assert_eq!(ledger.items().len(), 1);
        let item = &ledger.items()[0];
        assert_eq!(item.name(), "Fall Limited Edition Sneakers");
        assert_eq!(item.unit_price(), Price::from_cents(12_500));
        assert_eq!(item.quantity(), 3);
    }

    #[test]
    fn add_merges_by_name_instead_of_duplicating() {
        let mut ledger = CartLedger::new();
        ledger.add_items(&sneakers(), 2);
        ledger.add_items(&sneakers(), 1);

        assert_eq!(ledger.items().len(), 1);
        assert_eq!(ledger.items()[0].quantity(), 3);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut ledger = CartLedger::new();
        ledger.add_items(&sneakers(), 1);
        ledger.add_items(&other_product(), 1);
        ledger.add_items(&sneakers(), 1);

        let names: Vec<&str> = ledger.items().iter().map(LineItem::name).collect();
        assert_eq!(names, ["Fall Limited Edition Sneakers", "Winter Boots"]);
    }

    #[test]
    fn remove_deletes_whole_line_item() {
        let mut ledger = CartLedger::new();
        ledger.add_items(&sneakers(), 5);
        ledger.remove_item("Fall Limited Edition Sneakers");

        assert!(ledger.is_empty());
    }

    #[test]
    fn remove_missing_name_leaves_ledger_unchanged() {
        let mut ledger = CartLedger::new();
        ledger.add_items(&sneakers(), 2);

        ledger.remove_item("No Such Product");
        assert_eq!(ledger.items().len(), 1);
        assert_eq!(ledger.items()[0].quantity(), 2);

        // Removing from an empty ledger is equally safe.
        let mut empty = CartLedger::new();
        empty.remove_item("No Such Product");
        assert!(empty.is_empty());
    }

    #[test]
    fn totals_sum_over_all_line_items() {
        let mut ledger = CartLedger::new();
        ledger.add_items(&sneakers(), 3);
        ledger.add_items(&other_product(), 2);

        assert_eq!(ledger.total_quantity(), 5);
        assert_eq!(
            ledger.total_price(),
            Price::from_cents(3 * 12_500 + 2 * 9_900)
        );
    }

    #[test]
    fn row_total_multiplies_unit_price() {
        let mut ledger = CartLedger::new();
        ledger.add_items(&sneakers(), 3);
        assert_eq!(ledger.items()[0].row_total(), Price::from_cents(37_500));
        assert_eq!(ledger.items()[0].row_total().to_string(), "$375.00");
    }

    #[test]
    fn unit_price_is_captured_at_add_time() {
        let mut ledger = CartLedger::new();
        let mut product = sneakers();
        ledger.add_items(&product, 1);

        // A later price change does not rewrite the existing line item.
        product.price = Price::from_cents(1);
        ledger.add_items(&product, 1);
        assert_eq!(ledger.items()[0].unit_price(), Price::from_cents(12_500));
    }
}
