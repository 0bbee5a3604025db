//! Display snapshot of a cart.

use serde::{Deserialize, Serialize};

use crate::ids::ListingId;
use crate::money::Money;

/// One line of a [`CartSummary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSummary {
    pub listing_id: ListingId,
    pub title: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub line_total: Money,
}

/// Serializable snapshot of a cart: its lines, item count and total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub lines: Vec<LineSummary>,
    pub item_count: i64,
    pub total: Money,
}

impl CartSummary {
    /// Check if the summary has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total formatted for display (e.g., "₦9,500.00").
    pub fn total_display(&self) -> String {
        self.total.display()
    }
}
