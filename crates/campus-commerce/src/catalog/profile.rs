//! Seller profiles.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::UserId;

/// Public profile of a marketplace seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub university: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Whether the university email was confirmed.
    #[serde(default)]
    pub verified: bool,
    pub joined_date: NaiveDate,
    /// Average review score out of 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default)]
    pub review_count: u32,
}

impl SellerProfile {
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::ValidationError("seller name is empty".into()));
        }
        if !self.email.contains('@') {
            return Err(CommerceError::InvalidValue {
                field: "email",
                value: self.email.clone(),
            });
        }
        Ok(())
    }
}

/// Editable profile fields. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl ProfileUpdate {
    /// Overwrite the populated fields of `profile`.
    pub fn apply(self, profile: &mut SellerProfile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(email) = self.email {
            profile.email = email;
        }
        if let Some(university) = self.university {
            profile.university = university;
        }
        if let Some(avatar) = self.avatar {
            profile.avatar = Some(avatar);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> SellerProfile {
        SellerProfile {
            id: UserId::new("7"),
            name: "Ada Obi".into(),
            email: "ada@university.edu".into(),
            university: "University of Lagos".into(),
            avatar: None,
            verified: false,
            joined_date: NaiveDate::from_ymd_opt(2024, 11, 2).unwrap(),
            rating: None,
            review_count: 0,
        }
    }

    #[test]
    fn test_update_only_touches_populated_fields() {
        let mut p = profile();
        ProfileUpdate {
            university: Some("Covenant University".into()),
            ..ProfileUpdate::default()
        }
        .apply(&mut p);

        assert_eq!(p.university, "Covenant University");
        assert_eq!(p.name, "Ada Obi");
        assert_eq!(p.email, "ada@university.edu");
    }

    #[test]
    fn test_validate() {
        assert!(profile().validate().is_ok());

        let mut p = profile();
        p.email = "not-an-email".into();
        assert!(matches!(
            p.validate(),
            Err(CommerceError::InvalidValue { field: "email", .. })
        ));

        let mut p = profile();
        p.name = "  ".into();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_profile_json_shape() {
        let json = serde_json::to_value(profile()).unwrap();
        assert_eq!(json["joinedDate"], "2024-11-02");
        assert_eq!(json["reviewCount"], 0);
        assert!(json.get("avatar").is_none());
    }
}
