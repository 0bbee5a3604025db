//! Listing types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::{Category, Condition};
use crate::error::CommerceError;
use crate::ids::{ListingId, UserId};
use crate::money::Money;

/// Lifecycle status of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    /// Listed and purchasable.
    #[default]
    Available,
    /// A buyer has committed; awaiting handover.
    Pending,
    /// Handed over to a buyer.
    Sold,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Available => "available",
            ListingStatus::Pending => "pending",
            ListingStatus::Sold => "sold",
        }
    }
}

impl FromStr for ListingStatus {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(ListingStatus::Available),
            "pending" => Ok(ListingStatus::Pending),
            "sold" => Ok(ListingStatus::Sold),
            _ => Err(CommerceError::InvalidValue {
                field: "status",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single marketplace item for sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Unique listing identifier.
    pub id: ListingId,
    /// Listing title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Asking price.
    pub price: Money,
    /// Price when bought new, for showing the discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Listing category.
    pub category: Category,
    /// Item condition.
    pub condition: Condition,
    /// Image references, first one is the cover.
    pub images: Vec<String>,
    /// Seller's user ID.
    pub seller_id: UserId,
    /// Seller display name (denormalized for cards).
    #[serde(default)]
    pub seller_name: String,
    /// Meet-up location (e.g., "Main Library").
    pub location: String,
    /// Campus the item is on.
    pub campus: String,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
    /// View count.
    #[serde(default)]
    pub views: u64,
    /// Number of users who saved the listing.
    #[serde(default)]
    pub saved: u64,
    /// Lifecycle status.
    #[serde(default)]
    pub status: ListingStatus,
}

impl Listing {
    /// Check the listing's structural invariants.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.id.as_str().trim().is_empty() {
            return Err(CommerceError::ValidationError("listing id is empty".into()));
        }
        validate_fields(&self.title, &self.price, self.original_price.as_ref(), &self.images)
    }

    /// Check if the listing can be bought.
    pub fn is_available(&self) -> bool {
        self.status == ListingStatus::Available
    }

    /// Whole-percent saving against the original price, 0 when there is none.
    ///
    /// ```
    /// # use campus_commerce::catalog::Catalog;
    /// let catalog = Catalog::sample();
    /// let chemistry = catalog.get(&"1".into()).unwrap();
    /// assert_eq!(chemistry.discount_percentage(), 77); // 3,500 against 15,000
    /// ```
    pub fn discount_percentage(&self) -> u32 {
        let Some(original) = self.original_price else {
            return 0;
        };
        if original.currency != self.price.currency
            || original.amount_minor <= 0
            || original.amount_minor <= self.price.amount_minor
        {
            return 0;
        }
        let original = i128::from(original.amount_minor);
        let savings = original - i128::from(self.price.amount_minor);
        // Round half up.
        ((savings * 200 + original) / (original * 2)) as u32
    }

    /// The cover image, if any.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Seller-supplied fields for a new listing.
///
/// The catalog assigns the id, creation time, counters and status when the
/// draft is published.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub price: Money,
    #[serde(default)]
    pub original_price: Option<Money>,
    pub category: Category,
    pub condition: Condition,
    pub images: Vec<String>,
    pub seller_id: UserId,
    #[serde(default)]
    pub seller_name: String,
    pub location: String,
    pub campus: String,
}

impl ListingDraft {
    /// Validate the draft and turn it into a live listing.
    pub fn into_listing(self, created_at: DateTime<Utc>) -> Result<Listing, CommerceError> {
        validate_fields(&self.title, &self.price, self.original_price.as_ref(), &self.images)?;

        Ok(Listing {
            id: ListingId::generate(),
            title: self.title,
            description: self.description,
            price: self.price,
            original_price: self.original_price,
            category: self.category,
            condition: self.condition,
            images: self.images,
            seller_id: self.seller_id,
            seller_name: self.seller_name,
            location: self.location,
            campus: self.campus,
            created_at,
            views: 0,
            saved: 0,
            status: ListingStatus::Available,
        })
    }
}

/// Partial edit of a listing. `None` leaves a field unchanged.
///
/// `original_price` is doubly optional: `Some(None)` (JSON `null`) clears the
/// original price.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub original_price: Option<Option<Money>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ListingStatus>,
}

impl ListingPatch {
    /// Overwrite the populated fields of `listing`. Does not validate.
    pub fn apply(self, listing: &mut Listing) {
        if let Some(title) = self.title {
            listing.title = title;
        }
        if let Some(description) = self.description {
            listing.description = description;
        }
        if let Some(price) = self.price {
            listing.price = price;
        }
        if let Some(original_price) = self.original_price {
            listing.original_price = original_price;
        }
        if let Some(category) = self.category {
            listing.category = category;
        }
        if let Some(condition) = self.condition {
            listing.condition = condition;
        }
        if let Some(images) = self.images {
            listing.images = images;
        }
        if let Some(location) = self.location {
            listing.location = location;
        }
        if let Some(campus) = self.campus {
            listing.campus = campus;
        }
        if let Some(status) = self.status {
            listing.status = status;
        }
    }
}

/// A field that is present deserializes to `Some`, even when it is `null`.
fn present<'de, D, T>(d: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Some)
}

fn validate_fields(
    title: &str,
    price: &Money,
    original_price: Option<&Money>,
    images: &[String],
) -> Result<(), CommerceError> {
    if title.trim().is_empty() {
        return Err(CommerceError::ValidationError("title is empty".into()));
    }
    if price.is_negative() {
        return Err(CommerceError::ValidationError(format!(
            "price is negative: {}",
            price
        )));
    }
    if let Some(original) = original_price {
        if original.currency != price.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: price.currency.code().to_string(),
                got: original.currency.code().to_string(),
            });
        }
        if original.amount_minor < price.amount_minor {
            return Err(CommerceError::ValidationError(format!(
                "original price {} is below price {}",
                original, price
            )));
        }
    }
    if images.is_empty() {
        return Err(CommerceError::ValidationError(
            "at least one image is required".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn draft() -> ListingDraft {
        ListingDraft {
            title: "Graphing Calculator".to_string(),
            description: "TI-84 Plus, works perfectly".to_string(),
            price: Money::from_major(9000, Currency::NGN),
            original_price: Some(Money::from_major(20000, Currency::NGN)),
            category: Category::Tech,
            condition: Condition::Good,
            images: vec!["https://img.example/calc.jpg".to_string()],
            seller_id: UserId::new("4"),
            seller_name: "David Okonkwo".to_string(),
            location: "Engineering Building".to_string(),
            campus: "Main Campus".to_string(),
        }
    }

    #[test]
    fn test_cover_image_is_first_image() {
        let mut d = draft();
        d.images.push("https://img.example/calc-back.jpg".to_string());
        let listing = d.into_listing(Utc::now()).unwrap();
        assert_eq!(listing.cover_image(), Some("https://img.example/calc.jpg"));
    }

    #[test]
    fn test_draft_into_listing() {
        let listing = draft().into_listing(Utc::now()).unwrap();

        assert!(listing.id.as_str().starts_with("listing_"));
        assert_eq!(listing.status, ListingStatus::Available);
        assert_eq!(listing.views, 0);
        assert_eq!(listing.saved, 0);
        assert!(listing.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_drafts() {
        let mut no_images = draft();
        no_images.images.clear();
        assert!(matches!(
            no_images.into_listing(Utc::now()),
            Err(CommerceError::ValidationError(_))
        ));

        let mut negative = draft();
        negative.price = Money::new(-1, Currency::NGN);
        assert!(negative.into_listing(Utc::now()).is_err());

        let mut cheap_original = draft();
        cheap_original.original_price = Some(Money::from_major(100, Currency::NGN));
        assert!(cheap_original.into_listing(Utc::now()).is_err());

        let mut blank = draft();
        blank.title = "   ".to_string();
        assert!(blank.into_listing(Utc::now()).is_err());
    }

    #[test]
    fn test_discount_percentage() {
        let mut listing = draft().into_listing(Utc::now()).unwrap();
        assert_eq!(listing.discount_percentage(), 55);

        listing.original_price = None;
        assert_eq!(listing.discount_percentage(), 0);

        listing.original_price = Some(listing.price);
        assert_eq!(listing.discount_percentage(), 0);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("sold".parse::<ListingStatus>().unwrap(), ListingStatus::Sold);
        assert!("gone".parse::<ListingStatus>().is_err());
    }

    #[test]
    fn test_listing_json_shape() {
        let listing = draft().into_listing(Utc::now()).unwrap();
        let json = serde_json::to_value(&listing).unwrap();

        assert_eq!(json["category"], "tech");
        assert_eq!(json["condition"], "good");
        assert_eq!(json["status"], "available");
        assert_eq!(json["sellerId"], "4");
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_patch_applies_populated_fields() {
        let mut listing = draft().into_listing(Utc::now()).unwrap();
        ListingPatch {
            price: Some(Money::from_major(7500, Currency::NGN)),
            status: Some(ListingStatus::Pending),
            ..ListingPatch::default()
        }
        .apply(&mut listing);

        assert_eq!(listing.price, Money::from_major(7500, Currency::NGN));
        assert_eq!(listing.status, ListingStatus::Pending);
        assert_eq!(listing.title, "Graphing Calculator");
        assert!(listing.original_price.is_some());
    }

    #[test]
    fn test_patch_null_original_price_clears_it() {
        let patch: ListingPatch = serde_json::from_str(r#"{"originalPrice":null}"#).unwrap();
        assert_eq!(patch.original_price, Some(None));

        let untouched: ListingPatch = serde_json::from_str(r#"{"title":"Calc"}"#).unwrap();
        assert_eq!(untouched.original_price, None);

        let mut listing = draft().into_listing(Utc::now()).unwrap();
        patch.apply(&mut listing);
        assert_eq!(listing.original_price, None);
        assert_eq!(listing.discount_percentage(), 0);
    }
}
