//! The sample catalog the marketplace ships with until a real listing
//! backend exists.

use chrono::{DateTime, NaiveDate, Utc};

use crate::catalog::{Category, Condition, Listing, ListingStatus, SellerProfile};
use crate::ids::{ListingId, UserId};
use crate::money::{Currency, Money};

struct SellerRow {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    avatar: &'static str,
    joined: &'static str,
    rating: f32,
    reviews: u32,
}

const UNIVERSITY: &str = "University of Lagos";

const SELLERS: [SellerRow; 4] = [
    SellerRow {
        id: "1",
        name: "Sarah Johnson",
        email: "sarah.j@university.edu",
        avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400",
        joined: "2024-09-15",
        rating: 4.8,
        reviews: 24,
    },
    SellerRow {
        id: "2",
        name: "Michael Chen",
        email: "mchen@university.edu",
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400",
        joined: "2024-08-20",
        rating: 4.9,
        reviews: 31,
    },
    SellerRow {
        id: "3",
        name: "Emily Rodriguez",
        email: "emily.r@university.edu",
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400",
        joined: "2024-10-01",
        rating: 4.7,
        reviews: 18,
    },
    SellerRow {
        id: "4",
        name: "David Okonkwo",
        email: "d.okonkwo@university.edu",
        avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400",
        joined: "2024-07-12",
        rating: 5.0,
        reviews: 45,
    },
];

struct Row {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    price: i64,
    original_price: i64,
    category: Category,
    condition: Condition,
    images: &'static [&'static str],
    seller: usize,
    location: &'static str,
    created_at: &'static str,
    views: u64,
    saved: u64,
}

const ROWS: [Row; 10] = [
    Row {
        id: "1",
        title: "Organic Chemistry 8th Edition",
        description: "Excellent condition textbook for CHEM 201. Barely used, no highlighting or writing inside. Includes access code (unused).",
        price: 3500,
        original_price: 15000,
        category: Category::Textbooks,
        condition: Condition::LikeNew,
        images: &[
            "https://images.unsplash.com/photo-1544716278-ca5e3f4abd8c?w=800",
            "https://images.unsplash.com/photo-1589998059171-988d887df646?w=800",
        ],
        seller: 0,
        location: "Main Library",
        created_at: "2024-12-28T10:30:00Z",
        views: 124,
        saved: 18,
    },
    Row {
        id: "2",
        title: "MacBook Pro 13\" 2020",
        description: "M1 chip, 8GB RAM, 256GB SSD. Perfect for students. Comes with original charger and case. Battery health at 92%.",
        price: 85000,
        original_price: 150000,
        category: Category::Tech,
        condition: Condition::Good,
        images: &[
            "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=800",
            "https://images.unsplash.com/photo-1611186871348-b1ce696e52c9?w=800",
        ],
        seller: 1,
        location: "Student Center",
        created_at: "2024-12-27T14:20:00Z",
        views: 256,
        saved: 42,
    },
    Row {
        id: "3",
        title: "Mini Fridge - Perfect for Dorm",
        description: "Compact refrigerator, 1.7 cu ft. Great condition, very quiet. Moving out and need to sell quickly!",
        price: 8500,
        original_price: 18000,
        category: Category::DormGear,
        condition: Condition::Good,
        images: &["https://images.unsplash.com/photo-1571175443880-49e1d25b2bc5?w=800"],
        seller: 2,
        location: "West Dorms",
        created_at: "2024-12-26T09:15:00Z",
        views: 89,
        saved: 12,
    },
    Row {
        id: "4",
        title: "Calculus Early Transcendentals",
        description: "Stewart 9th edition. Used for MATH 151/152. Some highlighting but all pages intact. Great price!",
        price: 4200,
        original_price: 16500,
        category: Category::Textbooks,
        condition: Condition::Good,
        images: &["https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=800"],
        seller: 3,
        location: "Engineering Building",
        created_at: "2024-12-25T16:45:00Z",
        views: 167,
        saved: 28,
    },
    Row {
        id: "5",
        title: "Nike Running Shoes - Size 10",
        description: "Barely worn Nike Air Zoom Pegasus. Only used for one semester of PE class. Like new condition!",
        price: 6500,
        original_price: 12000,
        category: Category::Clothing,
        condition: Condition::LikeNew,
        images: &["https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=800"],
        seller: 0,
        location: "Gym",
        created_at: "2024-12-24T11:00:00Z",
        views: 93,
        saved: 15,
    },
    Row {
        id: "6",
        title: "Study Desk with Chair",
        description: "Solid wood desk and ergonomic chair. Perfect for dorm room. Disassembles for easy transport.",
        price: 12000,
        original_price: 25000,
        category: Category::Furniture,
        condition: Condition::Good,
        images: &["https://images.unsplash.com/photo-1518455027359-f3f8164ba6bd?w=800"],
        seller: 1,
        location: "East Dorms",
        created_at: "2024-12-23T13:30:00Z",
        views: 145,
        saved: 31,
    },
    Row {
        id: "7",
        title: "iPad Air 4th Gen with Apple Pencil",
        description: "64GB, WiFi. Includes Apple Pencil (2nd gen) and protective case. Perfect for note-taking!",
        price: 55000,
        original_price: 95000,
        category: Category::Tech,
        condition: Condition::LikeNew,
        images: &["https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=800"],
        seller: 2,
        location: "Library Cafe",
        created_at: "2024-12-22T08:20:00Z",
        views: 312,
        saved: 67,
    },
    Row {
        id: "8",
        title: "Basketball - Official Size",
        description: "Spalding official game ball. Well maintained, great grip. Perfect for pickup games!",
        price: 2500,
        original_price: 5000,
        category: Category::Sports,
        condition: Condition::Good,
        images: &["https://images.unsplash.com/photo-1546519638-68e109498ffc?w=800"],
        seller: 3,
        location: "Sports Complex",
        created_at: "2024-12-21T15:10:00Z",
        views: 67,
        saved: 9,
    },
    Row {
        id: "9",
        title: "Introduction to Psychology 12th Ed",
        description: "Kalat textbook for PSY 101. Excellent condition with minimal wear. No markings inside.",
        price: 3800,
        original_price: 14000,
        category: Category::Textbooks,
        condition: Condition::LikeNew,
        images: &["https://images.unsplash.com/photo-1512820790803-83ca734da794?w=800"],
        seller: 0,
        location: "Psychology Building",
        created_at: "2024-12-20T12:00:00Z",
        views: 198,
        saved: 34,
    },
    Row {
        id: "10",
        title: "Coffee Maker - Keurig K-Mini",
        description: "Single serve coffee maker. Perfect for dorm room. Includes 10 K-cups. Works perfectly!",
        price: 4500,
        original_price: 8000,
        category: Category::DormGear,
        condition: Condition::Good,
        images: &["https://images.unsplash.com/photo-1517668808822-9ebb02f2a0e6?w=800"],
        seller: 1,
        location: "North Dorms",
        created_at: "2024-12-19T10:45:00Z",
        views: 134,
        saved: 22,
    },
];

/// The ten sample listings, newest first, priced in naira.
pub fn sample_listings() -> Vec<Listing> {
    ROWS.iter().map(to_listing).collect()
}

/// Profiles of the four sellers behind the sample listings.
pub fn sample_sellers() -> Vec<SellerProfile> {
    SELLERS
        .iter()
        .map(|row| SellerProfile {
            id: UserId::new(row.id),
            name: row.name.to_string(),
            email: row.email.to_string(),
            university: UNIVERSITY.to_string(),
            avatar: Some(row.avatar.to_string()),
            verified: true,
            joined_date: row.joined.parse::<NaiveDate>().unwrap_or_default(),
            rating: Some(row.rating),
            review_count: row.reviews,
        })
        .collect()
}

fn to_listing(row: &Row) -> Listing {
    let seller = &SELLERS[row.seller % SELLERS.len()];
    Listing {
        id: ListingId::new(row.id),
        title: row.title.to_string(),
        description: row.description.to_string(),
        price: Money::from_major(row.price, Currency::NGN),
        original_price: Some(Money::from_major(row.original_price, Currency::NGN)),
        category: row.category,
        condition: row.condition,
        images: row.images.iter().map(|s| s.to_string()).collect(),
        seller_id: UserId::new(seller.id),
        seller_name: seller.name.to_string(),
        location: row.location.to_string(),
        campus: "Main Campus".to_string(),
        created_at: row
            .created_at
            .parse::<DateTime<Utc>>()
            .unwrap_or_default(),
        views: row.views,
        saved: row.saved,
        status: ListingStatus::Available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_is_valid() {
        let listings = sample_listings();
        assert_eq!(listings.len(), 10);
        for listing in &listings {
            listing.validate().unwrap();
        }
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let listings = sample_listings();
        let ids: HashSet<_> = listings.iter().map(|l| l.id.clone()).collect();
        assert_eq!(ids.len(), listings.len());
    }

    #[test]
    fn test_sample_timestamps_parsed() {
        let listings = sample_listings();
        assert_eq!(
            listings[0].created_at.to_rfc3339(),
            "2024-12-28T10:30:00+00:00"
        );
    }

    #[test]
    fn test_sample_sellers_own_every_listing() {
        let sellers = sample_sellers();
        assert_eq!(sellers.len(), 4);
        for seller in &sellers {
            seller.validate().unwrap();
            assert_ne!(seller.joined_date, NaiveDate::default());
        }
        for listing in sample_listings() {
            let owner = sellers.iter().find(|s| s.id == listing.seller_id).unwrap();
            assert_eq!(owner.name, listing.seller_name);
        }
    }
}
