//! Listing catalog module.
//!
//! Contains listings, their classifications, seller profiles and statistics,
//! and the sample catalog.

mod category;
mod listing;
mod profile;
mod sample;
mod seller;
mod source;

pub use category::{Category, Condition, FILTER_ALL};
pub use listing::{Listing, ListingDraft, ListingPatch, ListingStatus};
pub use profile::{ProfileUpdate, SellerProfile};
pub use sample::{sample_listings, sample_sellers};
pub use seller::SellerStats;
pub use source::Catalog;
