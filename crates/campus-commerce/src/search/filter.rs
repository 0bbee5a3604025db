//! Typed listing filters.

use std::cmp::Ordering;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::catalog::{Category, Condition, Listing};
use crate::error::CommerceError;
use crate::money::Money;

/// The conjunctive set of predicates applied to narrow a listing collection.
///
/// Every populated field must hold for a listing to match; an empty spec
/// matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Exact category match. Deserializes `"all"` or `""` as no constraint.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "category_filter"
    )]
    pub category: Option<Category>,
    /// Exact condition match. Deserializes `"all"` or `""` as no constraint.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "condition_filter"
    )]
    pub condition: Option<Condition>,
    /// Inclusive lower price bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Money>,
    /// Inclusive upper price bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Money>,
    /// Exact campus match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campus: Option<String>,
    /// Case-insensitive substring of title or description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl FilterSpec {
    /// A spec that matches every listing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one category.
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Restrict by a category filter value, where `"all"` clears the constraint.
    pub fn category_value(mut self, value: &str) -> Result<Self, CommerceError> {
        self.category = Category::parse_filter(value)?;
        Ok(self)
    }

    /// Restrict to one condition.
    pub fn condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Restrict by a condition filter value, where `"all"` clears the constraint.
    pub fn condition_value(mut self, value: &str) -> Result<Self, CommerceError> {
        self.condition = Condition::parse_filter(value)?;
        Ok(self)
    }

    /// Set the inclusive lower price bound.
    pub fn min_price(mut self, min: Money) -> Self {
        self.min_price = Some(min);
        self
    }

    /// Set the inclusive upper price bound.
    pub fn max_price(mut self, max: Money) -> Self {
        self.max_price = Some(max);
        self
    }

    /// Restrict to one campus.
    pub fn campus(mut self, campus: impl Into<String>) -> Self {
        self.campus = Some(campus.into());
        self
    }

    /// Free-text search. An empty string clears the constraint.
    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.search = if text.is_empty() { None } else { Some(text) };
        self
    }

    /// Check if no predicate is populated.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.condition.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.campus.is_none()
            && self.search.as_deref().map_or(true, str::is_empty)
    }

    /// Check a listing against every populated predicate.
    ///
    /// Price bounds compare only within one currency: a bound in a different
    /// currency from the listing never matches.
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(category) = self.category {
            if listing.category != category {
                return false;
            }
        }
        if let Some(condition) = self.condition {
            if listing.condition != condition {
                return false;
            }
        }
        if let Some(min) = &self.min_price {
            if listing.price.partial_cmp(min).map_or(true, Ordering::is_lt) {
                return false;
            }
        }
        if let Some(max) = &self.max_price {
            if listing.price.partial_cmp(max).map_or(true, Ordering::is_gt) {
                return false;
            }
        }
        if let Some(campus) = &self.campus {
            if &listing.campus != campus {
                return false;
            }
        }
        match self.search.as_deref() {
            Some(text) if !text.is_empty() => {
                let needle = text.to_lowercase();
                listing.title.to_lowercase().contains(&needle)
                    || listing.description.to_lowercase().contains(&needle)
            }
            _ => true,
        }
    }
}

fn category_filter<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Category>, D::Error> {
    match Option::<String>::deserialize(d)? {
        Some(value) => Category::parse_filter(&value).map_err(de::Error::custom),
        None => Ok(None),
    }
}

fn condition_filter<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Condition>, D::Error> {
    match Option::<String>::deserialize(d)? {
        Some(value) => Condition::parse_filter(&value).map_err(de::Error::custom),
        None => Ok(None),
    }
}
