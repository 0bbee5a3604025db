//! Seller dashboard statistics.

use serde::{Deserialize, Serialize};

use crate::catalog::{Listing, ListingStatus};
use crate::error::CommerceError;
use crate::ids::UserId;
use crate::money::{Currency, Money};

/// Summary numbers shown on a seller's dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerStats {
    /// Every listing the seller has created.
    pub total_listings: usize,
    /// Listings still available.
    pub active_listings: usize,
    /// Listings sold.
    pub sold_items: usize,
    /// Sum of the asking price of sold listings.
    pub total_earnings: Money,
}

impl SellerStats {
    /// Compute stats for `seller_id` over a listing collection.
    ///
    /// Earnings are totalled in the currency of the seller's first sold
    /// listing (NGN when nothing is sold).
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::CurrencyMismatch`] if sold listings are priced
    /// in different currencies, or [`CommerceError::Overflow`].
    pub fn for_seller(listings: &[Listing], seller_id: &UserId) -> Result<Self, CommerceError> {
        let mine: Vec<&Listing> = listings
            .iter()
            .filter(|l| &l.seller_id == seller_id)
            .collect();
        let sold: Vec<&Listing> = mine
            .iter()
            .copied()
            .filter(|l| l.status == ListingStatus::Sold)
            .collect();

        let currency = sold
            .first()
            .map(|l| l.price.currency)
            .unwrap_or(Currency::NGN);
        let mut total_earnings = Money::zero(currency);
        for listing in &sold {
            if listing.price.currency != currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: listing.price.currency.code().to_string(),
                });
            }
            total_earnings = total_earnings
                .try_add(&listing.price)
                .ok_or(CommerceError::Overflow)?;
        }

        Ok(Self {
            total_listings: mine.len(),
            active_listings: mine.iter().filter(|l| l.is_available()).count(),
            sold_items: sold.len(),
            total_earnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_listings;

    #[test]
    fn test_stats_for_seller_with_sales() {
        let mut listings = sample_listings();
        // Michael Chen sells the MacBook; the fridge (Emily) goes pending.
        listings[1].status = ListingStatus::Sold;
        listings[9].status = ListingStatus::Sold;
        listings[2].status = ListingStatus::Pending;

        let stats = SellerStats::for_seller(&listings, &"2".into()).unwrap();

        assert_eq!(stats.total_listings, 3);
        assert_eq!(stats.active_listings, 1);
        assert_eq!(stats.sold_items, 2);
        assert_eq!(stats.total_earnings, Money::from_major(89_500, Currency::NGN));

        let emily = SellerStats::for_seller(&listings, &"3".into()).unwrap();
        assert_eq!(emily.active_listings, 1);
        assert_eq!(emily.sold_items, 0);
    }

    #[test]
    fn test_stats_for_unknown_seller() {
        let stats = SellerStats::for_seller(&sample_listings(), &"99".into()).unwrap();
        assert_eq!(stats.total_listings, 0);
        assert!(stats.total_earnings.is_zero());
    }

    #[test]
    fn test_stats_mixed_currency_sales() {
        let mut listings = sample_listings();
        listings[1].status = ListingStatus::Sold;
        listings[5].status = ListingStatus::Sold;
        listings[5].price = Money::new(5000, Currency::USD);

        assert!(matches!(
            SellerStats::for_seller(&listings, &"2".into()),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }
}
