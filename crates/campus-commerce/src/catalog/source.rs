//! In-process listing source.

use chrono::Utc;

use crate::catalog::{
    sample_listings, sample_sellers, Listing, ListingDraft, ListingPatch, ProfileUpdate,
    SellerProfile, SellerStats,
};
use crate::error::CommerceError;
use crate::ids::{ListingId, UserId};
use crate::search::{self, FilterSpec, Page};

/// The full, current listing collection.
///
/// Hands the whole candidate set to the query engine; filtering happens
/// locally.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
    sellers: Vec<SellerProfile>,
}

impl Catalog {
    /// Create a catalog over the given listings.
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings,
            sellers: Vec::new(),
        }
    }

    /// Attach seller profiles.
    pub fn with_sellers(mut self, sellers: Vec<SellerProfile>) -> Self {
        self.sellers = sellers;
        self
    }

    /// The ten-listing sample catalog and its four sellers.
    pub fn sample() -> Self {
        Self::new(sample_listings()).with_sellers(sample_sellers())
    }

    /// All listings in catalog order.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Check if the catalog has no listings.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Look up a listing by ID.
    pub fn get(&self, id: &ListingId) -> Result<&Listing, CommerceError> {
        self.listings
            .iter()
            .find(|l| &l.id == id)
            .ok_or_else(|| CommerceError::ListingNotFound(id.to_string()))
    }

    /// Other listings in the same category, in catalog order, at most `limit`.
    pub fn related(&self, id: &ListingId, limit: usize) -> Result<Vec<&Listing>, CommerceError> {
        let listing = self.get(id)?;
        Ok(self
            .listings
            .iter()
            .filter(|l| &l.id != id && l.category == listing.category)
            .take(limit)
            .collect())
    }

    /// Every listing by one seller.
    pub fn by_seller(&self, seller_id: &UserId) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|l| &l.seller_id == seller_id)
            .collect()
    }

    /// Dashboard numbers for one seller.
    pub fn seller_stats(&self, seller_id: &UserId) -> Result<SellerStats, CommerceError> {
        SellerStats::for_seller(&self.listings, seller_id)
    }

    /// Validate a draft and add it to the catalog as an available listing.
    pub fn publish(&mut self, draft: ListingDraft) -> Result<&Listing, CommerceError> {
        let listing = draft.into_listing(Utc::now())?;
        tracing::info!(
            listing_id = %listing.id,
            seller_id = %listing.seller_id,
            category = %listing.category,
            "listing published"
        );
        self.listings.push(listing);
        self.listings
            .last()
            .ok_or_else(|| CommerceError::ValidationError("listing was not stored".into()))
    }

    /// Apply a partial edit to a listing.
    ///
    /// The edited listing is validated before it replaces the stored one, so
    /// a rejected patch leaves the catalog unchanged.
    pub fn update(&mut self, id: &ListingId, patch: ListingPatch) -> Result<&Listing, CommerceError> {
        let slot = self
            .listings
            .iter_mut()
            .find(|l| &l.id == id)
            .ok_or_else(|| CommerceError::ListingNotFound(id.to_string()))?;

        let mut edited = slot.clone();
        patch.apply(&mut edited);
        edited.validate()?;
        *slot = edited;

        tracing::info!(listing_id = %id, status = %slot.status, "listing updated");
        Ok(slot)
    }

    /// Remove a listing, returning it.
    pub fn remove(&mut self, id: &ListingId) -> Result<Listing, CommerceError> {
        let index = self
            .listings
            .iter()
            .position(|l| &l.id == id)
            .ok_or_else(|| CommerceError::ListingNotFound(id.to_string()))?;

        let removed = self.listings.remove(index);
        tracing::info!(listing_id = %id, "listing removed");
        Ok(removed)
    }

    /// All seller profiles.
    pub fn sellers(&self) -> &[SellerProfile] {
        &self.sellers
    }

    /// Look up a seller profile by ID.
    pub fn seller(&self, id: &UserId) -> Result<&SellerProfile, CommerceError> {
        self.sellers
            .iter()
            .find(|s| &s.id == id)
            .ok_or_else(|| CommerceError::SellerNotFound(id.to_string()))
    }

    /// Edit a seller profile.
    ///
    /// A changed name is copied onto the seller's listings, which carry it
    /// for display.
    pub fn update_seller(
        &mut self,
        id: &UserId,
        update: ProfileUpdate,
    ) -> Result<&SellerProfile, CommerceError> {
        let index = self
            .sellers
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| CommerceError::SellerNotFound(id.to_string()))?;

        let mut edited = self.sellers[index].clone();
        update.apply(&mut edited);
        edited.validate()?;

        if edited.name != self.sellers[index].name {
            for listing in self.listings.iter_mut().filter(|l| &l.seller_id == id) {
                listing.seller_name = edited.name.clone();
            }
        }
        self.sellers[index] = edited;

        tracing::info!(seller_id = %id, "seller profile updated");
        Ok(&self.sellers[index])
    }

    /// Filter and paginate the catalog.
    pub fn query(
        &self,
        filter: &FilterSpec,
        page: i64,
        page_size: i64,
    ) -> Result<Page<Listing>, CommerceError> {
        search::query(&self.listings, filter, page, page_size)
    }
}
