//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::money::Currency;

/// Storage key the web client has always used for the cart blob.
pub const DEFAULT_CART_KEY: &str = "unibuy_cart";

/// Configuration shared by the cart and catalog engines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Blob store key the cart is persisted under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Currency carts are totalled in.
    #[serde(default)]
    pub currency: Currency,

    /// Page size used when the caller does not pass one.
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,

    /// Maximum number of related listings shown next to a listing.
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
}

fn default_storage_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

fn default_page_size() -> i64 {
    20
}

fn default_related_limit() -> usize {
    4
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            currency: Currency::default(),
            default_page_size: default_page_size(),
            related_limit: default_related_limit(),
        }
    }
}

impl EngineConfig {
    /// Use a different storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Use a different cart currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }
}
