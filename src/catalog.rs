// SPDX-License-Identifier: MPL-2.0
//! Compiled-in product catalog.
//!
//! The storefront shows a single product with an ordered list of
//! full-size/thumbnail image pairs. Everything here is immutable
//! configuration baked in at build time; there is no load step.

use std::fmt;

/// A monetary amount in cents.
///
/// Prices are stored as integer cents so arithmetic and display formatting
/// never go through floating point. `Display` renders the conventional
/// `$N.NN` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Price(u64);

impl Price {
    /// Creates a price from an amount in cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Multiplies the unit price by a quantity, saturating on overflow.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// The product shown on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Display name; also the ledger key for cart line items.
    pub name: String,
    /// Current unit price.
    pub price: Price,
    /// Pre-discount price, shown struck through next to the current one.
    pub original_price: Price,
}

impl Product {
    /// Discount relative to the original price, in whole percent.
    ///
    /// Returns `None` when the product is not discounted.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        if self.original_price <= self.price || self.original_price.cents() == 0 {
            return None;
        }
        let saved = self.original_price.cents() - self.price.cents();
        Some((saved * 100 / self.original_price.cents()) as u32)
    }
}

/// One gallery entry: the full-size image and its thumbnail, as embedded
/// SVG documents.
#[derive(Debug, Clone, Copy)]
pub struct ImagePair {
    pub full: &'static [u8],
    pub thumbnail: &'static [u8],
}

/// The immutable catalog: one product plus its ordered image pairs.
#[derive(Debug, Clone)]
pub struct Catalog {
    product: Product,
    images: &'static [ImagePair],
}

static IMAGE_PAIRS: [ImagePair; 4] = [
    ImagePair {
        full: include_bytes!("../assets/product/image-product-1.svg"),
        thumbnail: include_bytes!("../assets/product/image-product-1-thumbnail.svg"),
    },
    ImagePair {
        full: include_bytes!("../assets/product/image-product-2.svg"),
        thumbnail: include_bytes!("../assets/product/image-product-2-thumbnail.svg"),
    },
    ImagePair {
        full: include_bytes!("../assets/product/image-product-3.svg"),
        thumbnail: include_bytes!("../assets/product/image-product-3-thumbnail.svg"),
    },
    ImagePair {
        full: include_bytes!("../assets/product/image-product-4.svg"),
        thumbnail: include_bytes!("../assets/product/image-product-4-thumbnail.svg"),
    },
];

impl Catalog {
    /// Returns the product.
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Returns the ordered image pairs.
    #[must_use]
    pub fn images(&self) -> &'static [ImagePair] {
        self.images
    }

    /// Returns the number of gallery images.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            product: Product {
                name: "Fall Limited Edition Sneakers".to_string(),
                price: Price::from_cents(12_500),
                original_price: Price::from_cents(25_000),
            },
            images: &IMAGE_PAIRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_displays_two_decimal_places() {
        assert_eq!(Price::from_cents(12_500).to_string(), "$125.00");
        assert_eq!(Price::from_cents(5).to_string(), "$0.05");
        assert_eq!(Price::from_cents(100).to_string(), "$1.00");
    }

    #[test]
    fn price_times_multiplies_by_quantity() {
        let unit = Price::from_cents(12_500);
        assert_eq!(unit.times(3), Price::from_cents(37_500));
        assert_eq!(unit.times(0), Price::from_cents(0));
    }

    #[test]
    fn price_times_saturates_instead_of_overflowing() {
        let huge = Price::from_cents(u64::MAX);
        assert_eq!(huge.times(2), Price::from_cents(u64::MAX));
    }

    #[test]
    fn default_catalog_has_four_image_pairs() {
        let catalog = Catalog::default();
        assert_eq!(catalog.image_count(), 4);
        for pair in catalog.images() {
            assert!(!pair.full.is_empty());
            assert!(!pair.thumbnail.is_empty());
        }
    }

    #[test]
    fn default_product_is_half_price() {
        let catalog = Catalog::default();
        assert_eq!(catalog.product().name, "Fall Limited Edition Sneakers");
        assert_eq!(catalog.product().price, Price::from_cents(12_500));
        assert_eq!(catalog.product().discount_percent(), Some(50));
    }

    #[test]
    fn discount_percent_is_none_without_markdown() {
        let product = Product {
            name: "Plain".into(),
            price: Price::from_cents(1_000),
            original_price: Price::from_cents(1_000),
        };
        assert_eq!(product.discount_percent(), None);
    }
}
