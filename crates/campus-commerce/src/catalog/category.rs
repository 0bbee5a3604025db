//! Closed-set listing classifications: category and condition.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// Filter value that means "any category" / "any condition".
pub const FILTER_ALL: &str = "all";

/// Listing category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Textbooks,
    DormGear,
    Tech,
    Clothing,
    Furniture,
    Sports,
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 7] = [
        Category::Textbooks,
        Category::DormGear,
        Category::Tech,
        Category::Clothing,
        Category::Furniture,
        Category::Sports,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Textbooks => "textbooks",
            Category::DormGear => "dorm-gear",
            Category::Tech => "tech",
            Category::Clothing => "clothing",
            Category::Furniture => "furniture",
            Category::Sports => "sports",
            Category::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Textbooks => "Textbooks",
            Category::DormGear => "Dorm Gear",
            Category::Tech => "Tech & Gadgets",
            Category::Clothing => "Clothing",
            Category::Furniture => "Furniture",
            Category::Sports => "Sports",
            Category::Other => "Other",
        }
    }

    /// Parse a filter value, where `"all"` (or an empty string) means no constraint.
    pub fn parse_filter(value: &str) -> Result<Option<Self>, CommerceError> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(FILTER_ALL) {
            return Ok(None);
        }
        value.parse().map(Some)
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::InvalidValue {
                field: "category",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical condition of a listed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    New,
    LikeNew,
    Good,
    Fair,
    Poor,
}

impl Condition {
    /// Every condition, best first.
    pub const ALL: [Condition; 5] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::LikeNew => "like-new",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::Poor => "poor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        }
    }

    /// Parse a filter value, where `"all"` (or an empty string) means no constraint.
    pub fn parse_filter(value: &str) -> Result<Option<Self>, CommerceError> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(FILTER_ALL) {
            return Ok(None);
        }
        value.parse().map(Some)
    }
}

impl FromStr for Condition {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::InvalidValue {
                field: "condition",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        assert_eq!(
            serde_json::to_string(&Category::DormGear).unwrap(),
            "\"dorm-gear\""
        );
        let parsed: Category = serde_json::from_str("\"textbooks\"").unwrap();
        assert_eq!(parsed, Category::Textbooks);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("tech".parse::<Category>().unwrap(), Category::Tech);
        assert_eq!("Dorm-Gear".parse::<Category>().unwrap(), Category::DormGear);
        assert!(matches!(
            "books".parse::<Category>(),
            Err(CommerceError::InvalidValue { field: "category", .. })
        ));
    }

    #[test]
    fn test_category_filter_all() {
        assert_eq!(Category::parse_filter("all").unwrap(), None);
        assert_eq!(Category::parse_filter("").unwrap(), None);
        assert_eq!(
            Category::parse_filter("sports").unwrap(),
            Some(Category::Sports)
        );
    }

    #[test]
    fn test_condition_roundtrip_names() {
        for condition in Condition::ALL {
            assert_eq!(condition.as_str().parse::<Condition>().unwrap(), condition);
        }
        assert_eq!(Condition::LikeNew.label(), "Like New");
        assert_eq!(
            serde_json::to_string(&Condition::LikeNew).unwrap(),
            "\"like-new\""
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::Tech.label(), "Tech & Gadgets");
        assert_eq!(Category::DormGear.to_string(), "dorm-gear");
    }
}
