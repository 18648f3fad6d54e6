//! Filtering, scoring, and sorting of restaurant listings.
//!
//! The pipeline is filter → score → sort: free-text query and category
//! toggles narrow the record list, then the active sort key orders it.
//! Every function here is a pure function of its inputs — recomputing on
//! any state change is always safe, and there are no caches to invalidate.
//!
//! All sorts are stable: records comparing equal under the active key keep
//! their input order, so rank badges and test expectations are reproducible.

use crate::types::RestaurantRecord;

/// Weight of the star rating in the leaderboard score.
pub const RATING_WEIGHT: f64 = 0.8;
/// Weight of the normalized review volume in the leaderboard score.
pub const REVIEWS_WEIGHT: f64 = 0.2;

/// Sort order for listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    RatingDesc,
    RatingAsc,
    ReviewsDesc,
    NameAsc,
    NameDesc,
    /// Weighted rating/review composite, leaderboard order.
    ScoreDesc,
}

impl SortKey {
    /// Canonical identifier, as used in shareable URLs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RatingDesc => "rating_desc",
            Self::RatingAsc => "rating_asc",
            Self::ReviewsDesc => "reviews_desc",
            Self::NameAsc => "name_asc",
            Self::NameDesc => "name_desc",
            Self::ScoreDesc => "score_desc",
        }
    }

    /// Parse a sort identifier. Accepts the short leaderboard aliases
    /// (`score`, `rating`, `reviews`) alongside the canonical keys.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "rating_desc" | "rating" => Some(Self::RatingDesc),
            "rating_asc" => Some(Self::RatingAsc),
            "reviews_desc" | "reviews" => Some(Self::ReviewsDesc),
            "name_asc" => Some(Self::NameAsc),
            "name_desc" => Some(Self::NameDesc),
            "score_desc" | "score" => Some(Self::ScoreDesc),
            _ => None,
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown sort key: {s}"))
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-controlled filter and sort selection.
///
/// Seeded from URL parameters on load (see [`crate::query`]), mutated by
/// interaction, and serialized back after every change. Matching is
/// case-insensitive throughout, so casing of the stored values is free.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Free-text search over name, location, and specialties.
    pub query: String,
    /// Category labels toggled on, e.g. `["chicken", "beef"]`.
    pub active_categories: Vec<String>,
    /// City filter for leaderboard views. `None` means all cities.
    pub city: Option<String>,
    pub sort: SortKey,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// True when the (trimmed, case-folded) query is empty or appears in the
/// record's name, location, or joined specialties text.
pub fn matches_query(record: &RestaurantRecord, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    record.name.to_lowercase().contains(&q)
        || record.location.to_lowercase().contains(&q)
        || record.specialties.join(" ").to_lowercase().contains(&q)
}

/// True when no categories are active, or any active label appears inside
/// any specialty string ("chicken" matches "Chicken Mandhi").
pub fn matches_categories(record: &RestaurantRecord, active: &[String]) -> bool {
    if active.is_empty() {
        return true;
    }
    let specialties: Vec<String> = record
        .specialties
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    active
        .iter()
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty())
        .any(|category| specialties.iter().any(|s| s.contains(&category)))
}

fn matches_city(record: &RestaurantRecord, city: Option<&str>) -> bool {
    match city {
        None => true,
        Some(city) => record.location.eq_ignore_ascii_case(city),
    }
}

/// Keep records matching the query, the active categories, and the city.
pub fn filter<'a>(
    records: &'a [RestaurantRecord],
    state: &FilterState,
) -> Vec<&'a RestaurantRecord> {
    records
        .iter()
        .filter(|r| {
            matches_query(r, &state.query)
                && matches_categories(r, &state.active_categories)
                && matches_city(r, state.city.as_deref())
        })
        .collect()
}

/// Largest review count in a result set, for score normalization.
pub fn max_review_count(records: &[&RestaurantRecord]) -> u64 {
    records.iter().map(|r| r.review_count).max().unwrap_or(0)
}

/// Weighted rating/review-volume score, rounded to 3 decimals.
///
/// Rating dominates; review volume is a secondary credibility signal,
/// normalized against the current result set's maximum so scores are
/// comparable within one listing.
pub fn weighted_score(record: &RestaurantRecord, max_reviews: u64) -> f64 {
    let rating_part = record.effective_rating() / 5.0;
    let reviews_part = record.review_count as f64 / max_reviews.max(1) as f64;
    let raw = RATING_WEIGHT * rating_part + REVIEWS_WEIGHT * reviews_part;
    (raw * 1000.0).round() / 1000.0
}

/// Stable sort by the given key.
pub fn sort<'a>(mut records: Vec<&'a RestaurantRecord>, key: SortKey) -> Vec<&'a RestaurantRecord> {
    match key {
        SortKey::RatingDesc => {
            records.sort_by(|a, b| b.effective_rating().total_cmp(&a.effective_rating()));
        }
        SortKey::RatingAsc => {
            records.sort_by(|a, b| a.effective_rating().total_cmp(&b.effective_rating()));
        }
        SortKey::ReviewsDesc => {
            records.sort_by(|a, b| b.review_count.cmp(&a.review_count));
        }
        SortKey::NameAsc => {
            records.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortKey::NameDesc => {
            records.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()));
        }
        SortKey::ScoreDesc => {
            let max_reviews = max_review_count(&records);
            records.sort_by(|a, b| {
                weighted_score(b, max_reviews).total_cmp(&weighted_score(a, max_reviews))
            });
        }
    }
    records
}

/// Filter then sort — the full listing pipeline.
pub fn rank<'a>(records: &'a [RestaurantRecord], state: &FilterState) -> Vec<&'a RestaurantRecord> {
    sort(filter(records, state), state.sort)
}

/// A ranked record with its computed score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEntry<'a> {
    pub record: &'a RestaurantRecord,
    pub score: f64,
}

/// Leaderboard view: filter, score against the filtered set's maximum
/// review count, sort by score descending, then keep the first `size`.
///
/// Truncation happens strictly after the full sort.
pub fn leaderboard<'a>(
    records: &'a [RestaurantRecord],
    state: &FilterState,
    size: usize,
) -> Vec<ScoredEntry<'a>> {
    let filtered = filter(records, state);
    let max_reviews = max_review_count(&filtered);
    let mut entries: Vec<ScoredEntry<'a>> = filtered
        .into_iter()
        .map(|record| ScoredEntry {
            record,
            score: weighted_score(record, max_reviews),
        })
        .collect();
    entries.sort_by(|a, b| b.score.total_cmp(&a.score));
    entries.truncate(size);
    entries
}
