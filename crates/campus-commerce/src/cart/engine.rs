//! Persistent cart engine.
//!
//! [`CartEngine`] owns a [`Cart`] and writes it through to a [`BlobStore`]
//! after every mutation. The in-memory cart is authoritative: a failed
//! write is logged and otherwise ignored, and an unreadable blob on load
//! produces an empty cart.

use campus_store::{BlobStore, Cache};

use crate::cart::{Cart, CartLine, CartSummary};
use crate::catalog::Listing;
use crate::config::EngineConfig;
use crate::error::CommerceError;
use crate::ids::ListingId;
use crate::money::Money;

/// Cart bound to a blob store.
#[derive(Debug)]
pub struct CartEngine<S> {
    cart: Cart,
    cache: Cache<S>,
    storage_key: String,
}

impl<S: BlobStore> CartEngine<S> {
    /// Restore the cart persisted under `config.storage_key`.
    ///
    /// Never fails: a missing key gives an empty cart, and a blob that cannot
    /// be read or decoded is logged and also gives an empty cart.
    pub fn load(store: S, config: &EngineConfig) -> Self {
        let cache = Cache::new(store);
        let cart = match cache.get::<Vec<CartLine>>(&config.storage_key) {
            Ok(Some(lines)) => Cart::from_lines(lines, config.currency),
            Ok(None) => Cart::new(config.currency),
            Err(e) => {
                tracing::warn!(key = %config.storage_key, error = %e, "discarding unreadable persisted cart");
                Cart::new(config.currency)
            }
        };

        tracing::debug!(
            key = %config.storage_key,
            lines = cart.unique_item_count(),
            "cart loaded"
        );

        Self {
            cart,
            cache,
            storage_key: config.storage_key.clone(),
        }
    }

    /// Add `quantity` of a listing, then persist.
    ///
    /// Nothing is persisted when the add is rejected.
    pub fn add_item(&mut self, listing: &Listing, quantity: i64) -> Result<(), CommerceError> {
        self.cart.add_item(listing, quantity)?;
        self.persist();
        Ok(())
    }

    /// Add a single unit of a listing.
    pub fn add_one(&mut self, listing: &Listing) -> Result<(), CommerceError> {
        self.add_item(listing, 1)
    }

    /// Remove a listing's line, then persist. Absent listings are a no-op.
    pub fn remove_item(&mut self, listing_id: &ListingId) {
        self.cart.remove_item(listing_id);
        self.persist();
    }

    /// Set a line's quantity, then persist. Zero or less removes the line.
    pub fn update_quantity(&mut self, listing_id: &ListingId, quantity: i64) {
        self.cart.update_quantity(listing_id, quantity);
        self.persist();
    }

    /// Empty the cart, then persist.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist();
    }

    pub fn is_in_cart(&self, listing_id: &ListingId) -> bool {
        self.cart.is_in_cart(listing_id)
    }

    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    pub fn total(&self) -> Result<Money, CommerceError> {
        self.cart.total()
    }

    pub fn summary(&self) -> Result<CartSummary, CommerceError> {
        self.cart.summary()
    }

    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// The in-memory cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Key the cart is persisted under.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Write the cart to the store, surfacing any failure.
    pub fn save(&mut self) -> Result<(), CommerceError> {
        self.cache.set(&self.storage_key, self.cart.lines())?;
        Ok(())
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        self.cache.store()
    }

    /// Unwrap the underlying store.
    pub fn into_store(self) -> S {
        self.cache.into_store()
    }

    fn persist(&mut self) {
        if let Err(e) = self.save() {
            tracing::warn!(key = %self.storage_key, error = %e, "failed to persist cart");
        }
    }
}
