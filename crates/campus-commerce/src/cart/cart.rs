//! Cart and cart line types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{CartSummary, LineSummary};
use crate::catalog::Listing;
use crate::error::CommerceError;
use crate::ids::ListingId;
use crate::money::{Currency, Money};

/// One listing-plus-quantity record inside a cart.
///
/// Holds a snapshot of the listing taken when it was added: later price
/// changes to the listing are not reflected here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Listing snapshot captured at add time. Also read from `product`.
    #[serde(alias = "product")]
    pub listing: Listing,
    /// Quantity, always at least 1.
    pub quantity: i64,
    /// When the listing was first added.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// The listing this line is for.
    pub fn listing_id(&self) -> &ListingId {
        &self.listing.id
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.listing
            .price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// A shopping cart.
///
/// Lines are kept in insertion order and there is at most one line per
/// listing. Item count and total are derived from the lines on every call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart totalled in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Rebuild a cart from stored lines, repairing anything that breaks the
    /// cart invariants.
    ///
    /// Lines with a non-positive quantity or a foreign currency are dropped;
    /// duplicate listings are merged into the first occurrence.
    pub fn from_lines(lines: Vec<CartLine>, currency: Currency) -> Self {
        let mut cart = Self::new(currency);
        for line in lines {
            if line.quantity <= 0 {
                tracing::warn!(listing_id = %line.listing.id, quantity = line.quantity, "dropping stored cart line with non-positive quantity");
                continue;
            }
            if line.listing.price.currency != currency {
                tracing::warn!(
                    listing_id = %line.listing.id,
                    line_currency = %line.listing.price.currency,
                    cart_currency = %currency,
                    "dropping stored cart line in foreign currency"
                );
                continue;
            }
            match cart.lines.iter_mut().find(|l| l.listing.id == line.listing.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// Add `quantity` of a listing.
    ///
    /// Merges into the existing line for the same listing, otherwise appends
    /// a new line at the end with a snapshot of the listing.
    ///
    /// Returns an error if:
    /// - Quantity is not positive
    /// - The listing is priced in a different currency from the cart
    /// - The merged quantity would overflow
    pub fn add_item(&mut self, listing: &Listing, quantity: i64) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if listing.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: listing.price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.lines.iter_mut().find(|l| l.listing.id == listing.id) {
            existing.quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            return Ok(());
        }

        self.lines.push(CartLine {
            listing: listing.clone(),
            quantity,
            added_at: Utc::now(),
        });
        Ok(())
    }

    /// Remove the line for a listing. Returns whether a line was removed.
    pub fn remove_item(&mut self, listing_id: &ListingId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.listing.id != listing_id);
        self.lines.len() < len_before
    }

    /// Set the quantity of a line.
    ///
    /// A quantity of zero or less removes the line. Returns whether the cart
    /// changed; updating an absent listing is a no-op.
    pub fn update_quantity(&mut self, listing_id: &ListingId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(listing_id);
        }

        match self.lines.iter_mut().find(|l| &l.listing.id == listing_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Check if a listing has a line in the cart.
    pub fn is_in_cart(&self, listing_id: &ListingId) -> bool {
        self.lines.iter().any(|l| &l.listing.id == listing_id)
    }

    /// Get the line for a listing.
    pub fn line(&self, listing_id: &ListingId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.listing.id == listing_id)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0_i64, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Number of distinct listings.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The currency totals are computed in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Sum of price times quantity over all lines.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.lines.iter().try_fold(Money::zero(self.currency), |acc, line| {
            let line_total = line.line_total()?;
            acc.try_add(&line_total).ok_or_else(|| {
                if line_total.currency != acc.currency {
                    CommerceError::CurrencyMismatch {
                        expected: acc.currency.code().to_string(),
                        got: line_total.currency.code().to_string(),
                    }
                } else {
                    CommerceError::Overflow
                }
            })
        })
    }

    /// Snapshot of the cart for display.
    pub fn summary(&self) -> Result<CartSummary, CommerceError> {
        let lines = self
            .lines
            .iter()
            .map(|line| {
                Ok(LineSummary {
                    listing_id: line.listing.id.clone(),
                    title: line.listing.title.clone(),
                    unit_price: line.listing.price,
                    quantity: line.quantity,
                    line_total: line.line_total()?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        Ok(CartSummary {
            lines,
            item_count: self.item_count(),
            total: self.total()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_listings;

    fn listing(id: &str) -> Listing {
        sample_listings()
            .into_iter()
            .find(|l| l.id.as_str() == id)
            .unwrap()
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(Currency::NGN);
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total().unwrap(), Money::zero(Currency::NGN));
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new(Currency::NGN);
        cart.add_item(&listing("1"), 2).unwrap();

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.unique_item_count(), 1);
        assert!(cart.is_in_cart(&"1".into()));
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new(Currency::NGN);
        let chemistry = listing("1");

        cart.add_item(&chemistry, 1).unwrap();
        cart.add_item(&chemistry, 1).unwrap();

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.line(&chemistry.id).unwrap().quantity, 2);
        assert_eq!(cart.total().unwrap(), chemistry.price.try_multiply(2).unwrap());
    }

    #[test]
    fn test_add_appends_in_insertion_order() {
        let mut cart = Cart::new(Currency::NGN);
        cart.add_item(&listing("7"), 1).unwrap();
        cart.add_item(&listing("2"), 1).unwrap();
        cart.add_item(&listing("7"), 1).unwrap();

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.listing_id().as_str()).collect();
        assert_eq!(ids, vec!["7", "2"]);
    }

    #[test]
    fn test_add_keeps_first_added_at() {
        let mut cart = Cart::new(Currency::NGN);
        let ball = listing("8");
        cart.add_item(&ball, 1).unwrap();
        let first = cart.line(&ball.id).unwrap().added_at;

        cart.add_item(&ball, 3).unwrap();
        assert_eq!(cart.line(&ball.id).unwrap().added_at, first);
    }

    #[test]
    fn test_invalid_quantity() {
        let mut cart = Cart::new(Currency::NGN);
        assert!(matches!(
            cart.add_item(&listing("1"), 0),
            Err(CommerceError::InvalidQuantity(0))
        ));
        assert!(cart.add_item(&listing("1"), -3).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_currency_mismatch() {
        let mut cart = Cart::new(Currency::USD);
        let result = cart.add_item(&listing("1"), 1);
        assert!(matches!(result, Err(CommerceError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_quantity_overflow() {
        let mut cart = Cart::new(Currency::NGN);
        let ball = listing("8");
        cart.add_item(&ball, i64::MAX).unwrap();
        assert!(matches!(
            cart.add_item(&ball, 1),
            Err(CommerceError::Overflow)
        ));
        assert!(matches!(cart.total(), Err(CommerceError::Overflow)));
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new(Currency::NGN);
        cart.add_item(&listing("3"), 1).unwrap();

        assert!(cart.update_quantity(&"3".into(), 5));
        assert_eq!(cart.item_count(), 5);
        assert!(!cart.update_quantity(&"missing".into(), 5));
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new(Currency::NGN);
        cart.add_item(&listing("3"), 4).unwrap();
        cart.add_item(&listing("5"), 1).unwrap();

        assert!(cart.update_quantity(&"3".into(), 0));
        assert!(!cart.is_in_cart(&"3".into()));
        assert!(cart.update_quantity(&"5".into(), -1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new(Currency::NGN);
        cart.add_item(&listing("6"), 1).unwrap();

        assert!(cart.remove_item(&"6".into()));
        assert!(!cart.remove_item(&"6".into()));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total() {
        let mut cart = Cart::new(Currency::NGN);
        cart.add_item(&listing("1"), 2).unwrap(); // 3,500
        cart.add_item(&listing("8"), 1).unwrap(); // 2,500

        assert_eq!(cart.total().unwrap(), Money::from_major(9500, Currency::NGN));
    }

    #[test]
    fn test_snapshot_price_is_frozen() {
        let mut cart = Cart::new(Currency::NGN);
        let mut laptop = listing("2");
        cart.add_item(&laptop, 1).unwrap();

        laptop.price = Money::from_major(1, Currency::NGN);
        cart.add_item(&laptop, 1).unwrap();

        assert_eq!(
            cart.total().unwrap(),
            Money::from_major(170_000, Currency::NGN)
        );
    }

    #[test]
    fn test_from_lines_repairs_invariants() {
        let now = Utc::now();
        let mut foreign = listing("4");
        foreign.price = Money::new(999, Currency::USD);
        let lines = vec![
            CartLine { listing: listing("1"), quantity: 1, added_at: now },
            CartLine { listing: listing("2"), quantity: 0, added_at: now },
            CartLine { listing: listing("1"), quantity: 2, added_at: now },
            CartLine { listing: foreign, quantity: 1, added_at: now },
            CartLine { listing: listing("9"), quantity: 1, added_at: now },
        ];

        let cart = Cart::from_lines(lines, Currency::NGN);

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.listing_id().as_str()).collect();
        assert_eq!(ids, vec!["1", "9"]);
        assert_eq!(cart.line(&"1".into()).unwrap().quantity, 3);
    }

    #[test]
    fn test_summary() {
        let mut cart = Cart::new(Currency::NGN);
        cart.add_item(&listing("10"), 2).unwrap();

        let summary = cart.summary().unwrap();
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].line_total, Money::from_major(9000, Currency::NGN));
        assert_eq!(summary.total, Money::from_major(9000, Currency::NGN));
    }
}
