//! Shared test utilities: restaurant record builders.
//!
//! Builders fill in the boring fields so tests only state what they assert
//! on. `sample_records` mirrors the demo dataset the directory API serves.

use crate::types::RestaurantRecord;

/// A minimal record: no ratings, no specialties, no image.
pub fn record(id: u64, name: &str, location: &str) -> RestaurantRecord {
    RestaurantRecord {
        id,
        name: name.to_string(),
        location: location.to_string(),
        kind: "Multi-Cuisine".to_string(),
        specialties: Vec::new(),
        rating: None,
        avg_rating: None,
        review_count: 0,
        image: None,
        description: None,
        phone: None,
        address: None,
    }
}

/// A record with an average rating and review count.
pub fn rated(id: u64, name: &str, avg_rating: f64, review_count: u64) -> RestaurantRecord {
    RestaurantRecord {
        avg_rating: Some(avg_rating),
        review_count,
        ..record(id, name, "Downtown")
    }
}

/// Attach specialties to a record.
pub fn with_specialties(mut r: RestaurantRecord, specialties: &[&str]) -> RestaurantRecord {
    r.specialties = specialties.iter().map(|s| s.to_string()).collect();
    r
}

/// The four demo restaurants the directory API ships with.
pub fn sample_records() -> Vec<RestaurantRecord> {
    vec![
        RestaurantRecord {
            kind: "Hyderabadi Cuisine".into(),
            rating: Some(4.8),
            ..with_specialties(
                record(1, "Hyderabadi Biryani House", "Downtown, City Center"),
                &["Chicken Biryani", "Mutton Biryani", "Vegetable Biryani"],
            )
        },
        RestaurantRecord {
            kind: "Arabian Cuisine".into(),
            rating: Some(4.6),
            ..with_specialties(
                record(2, "Royal Mandhi Palace", "Heritage District"),
                &["Lamb Mandhi", "Chicken Mandhi", "Fish Mandhi"],
            )
        },
        RestaurantRecord {
            rating: Some(4.5),
            ..with_specialties(
                record(3, "Spice Garden Restaurant", "Food Street"),
                &["Mixed Grill Mandhi", "Seafood Biryani", "Vegetarian Platter"],
            )
        },
        RestaurantRecord {
            kind: "Traditional Cuisine".into(),
            rating: Some(4.7),
            ..with_specialties(
                record(4, "Traditional Flavors", "Old Town"),
                &["Traditional Goat Mandhi", "Chicken Kabsa", "Homemade Bread"],
            )
        },
    ]
}
