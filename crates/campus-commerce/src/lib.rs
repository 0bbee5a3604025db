//! Cart and catalog engine for the campus marketplace.
//!
//! This crate provides the domain types and the two engines behind the
//! marketplace pages:
//!
//! - **Catalog**: Listings, categories, conditions, the sample catalog, seller stats
//! - **Search**: Filter specs and the paginated catalog query
//! - **Cart**: Shopping cart with write-through persistence to a blob store
//!
//! # Example
//!
//! ```rust
//! use campus_commerce::prelude::*;
//! use campus_store::MemoryStore;
//!
//! let catalog = Catalog::sample();
//! let filter = FilterSpec::new()
//!     .category(Category::Textbooks)
//!     .max_price(Money::from_major(4000, Currency::NGN));
//! let page = catalog.query(&filter, 1, 20).unwrap();
//! assert_eq!(page.total, 2);
//!
//! let mut cart = CartEngine::load(MemoryStore::new(), &EngineConfig::default());
//! cart.add_one(&page.items[0]).unwrap();
//! cart.add_one(&page.items[0]).unwrap();
//! assert_eq!(cart.item_count(), 2);
//! println!("Total: {}", cart.total().unwrap());
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use config::EngineConfig;
pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Catalog, Category, Condition, Listing, ListingDraft, ListingPatch, ListingStatus,
        ProfileUpdate, SellerProfile, SellerStats,
    };

    // Cart
    pub use crate::cart::{Cart, CartEngine, CartLine, CartSummary, LineSummary};

    // Search
    pub use crate::search::{FilterSpec, Page};
}
