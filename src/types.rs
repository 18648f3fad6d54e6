//! Shared record types for the restaurant directory.
//!
//! These mirror the JSON payloads exchanged with the directory API
//! (`GET /api/restaurants`, review listings), so datasets and API captures
//! deserialize directly. Records are read-only from the pipeline's
//! perspective — filtering and ranking never mutate them.

use serde::{Deserialize, Serialize};

/// Stock photo shown for records without an image of their own.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1563379091339-03246963d51a?w=400";

/// A restaurant entry in the directory.
///
/// `rating` is the legacy single score; newer payloads carry `avg_rating`
/// plus `review_count` computed from the review table. When both are present,
/// `avg_rating` wins — see [`RestaurantRecord::effective_rating`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub id: u64,
    pub name: String,
    /// Free-text city/area string, e.g. "Heritage District".
    pub location: String,
    /// Cuisine label, e.g. "Arabian Cuisine". Serialized as `type`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Dish labels, e.g. "Chicken Mandhi". Absent means none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specialties: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub review_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl RestaurantRecord {
    /// Rating used for display and ranking: `avg_rating`, then `rating`, then 0.
    pub fn effective_rating(&self) -> f64 {
        self.avg_rating.or(self.rating).unwrap_or(0.0)
    }

    /// Photo URL, falling back to the stock placeholder.
    pub fn image_url(&self) -> &str {
        self.image.as_deref().unwrap_or(DEFAULT_IMAGE_URL)
    }
}

/// A single review of a restaurant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: u64,
    /// Star rating, 1–5.
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub created_at: String,
}

/// Aggregate a review list into `(avg_rating, review_count)`.
///
/// An empty list aggregates to `(0.0, 0)` — a record with no reviews ranks
/// by its legacy `rating`, if any.
pub fn aggregate_reviews(reviews: &[Review]) -> (f64, u64) {
    if reviews.is_empty() {
        return (0.0, 0);
    }
    let sum: u64 = reviews.iter().map(|r| r.rating as u64).sum();
    (sum as f64 / reviews.len() as f64, reviews.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::record;

    #[test]
    fn avg_rating_wins_over_legacy_rating() {
        let mut r = record(1, "Royal Mandhi Palace", "Heritage District");
        r.rating = Some(4.6);
        r.avg_rating = Some(4.2);
        assert_eq!(r.effective_rating(), 4.2);
    }

    #[test]
    fn legacy_rating_used_when_no_average() {
        let mut r = record(1, "Royal Mandhi Palace", "Heritage District");
        r.rating = Some(4.6);
        assert_eq!(r.effective_rating(), 4.6);
    }

    #[test]
    fn unrated_record_scores_zero() {
        let r = record(1, "Royal Mandhi Palace", "Heritage District");
        assert_eq!(r.effective_rating(), 0.0);
    }

    #[test]
    fn missing_image_falls_back_to_placeholder() {
        let mut r = record(1, "Spice Garden", "Food Street");
        assert_eq!(r.image_url(), DEFAULT_IMAGE_URL);
        r.image = Some("https://example.com/spice.jpg".into());
        assert_eq!(r.image_url(), "https://example.com/spice.jpg");
    }

    #[test]
    fn deserializes_api_payload_with_missing_fields() {
        let json = r#"{"id": 7, "name": "Traditional Flavors", "location": "Old Town", "type": "Traditional Cuisine", "rating": 4.7}"#;
        let r: RestaurantRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, 7);
        assert!(r.specialties.is_empty());
        assert_eq!(r.review_count, 0);
        assert_eq!(r.effective_rating(), 4.7);
    }

    #[test]
    fn kind_round_trips_as_type_field() {
        let mut r = record(2, "Royal Mandhi Palace", "Heritage District");
        r.kind = "Arabian Cuisine".into();
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains(r#""type":"Arabian Cuisine""#));
        let back: RestaurantRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind, "Arabian Cuisine");
    }

    #[test]
    fn aggregate_computes_mean_and_count() {
        let reviews: Vec<Review> = [5, 4, 4]
            .iter()
            .enumerate()
            .map(|(i, &stars)| Review {
                id: i as u64 + 1,
                rating: stars,
                comment: None,
                user_name: None,
                created_at: "2026-08-01T12:00:00Z".into(),
            })
            .collect();
        let (avg, count) = aggregate_reviews(&reviews);
        assert_eq!(count, 3);
        assert!((avg - 13.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn aggregate_empty_is_zero() {
        assert_eq!(aggregate_reviews(&[]), (0.0, 0));
    }
}
