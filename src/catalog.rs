//! Dataset loading and validation.
//!
//! A dataset is a JSON array of [`RestaurantRecord`]s — the exact shape the
//! directory API serves from `GET /api/restaurants`. Loading validates the
//! invariants the rest of the toolkit relies on: unique ids and ratings
//! within the 0–5 star range.
//!
//! [`CatalogState`] models the dataset's arrival from an external source.
//! "Not here yet" and "here but empty" are different states, and a failed
//! fetch is different from both; callers render each distinctly. No retry
//! logic lives here — if the source wants retries, it re-loads and hands
//! over a fresh state.

use crate::types::RestaurantRecord;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate restaurant id {0}")]
    DuplicateId(u64),
    #[error("Rating {value} out of range [0, 5] for restaurant {id}")]
    RatingOutOfRange { id: u64, value: f64 },
    #[error("Dataset not found: {0}")]
    NotFound(PathBuf),
}

/// A validated set of restaurant records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub restaurants: Vec<RestaurantRecord>,
}

impl Catalog {
    /// Validate and wrap a record list.
    pub fn from_records(restaurants: Vec<RestaurantRecord>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for r in &restaurants {
            if !seen.insert(r.id) {
                return Err(CatalogError::DuplicateId(r.id));
            }
            for value in [r.rating, r.avg_rating].into_iter().flatten() {
                if !(0.0..=5.0).contains(&value) {
                    return Err(CatalogError::RatingOutOfRange { id: r.id, value });
                }
            }
        }
        Ok(Self { restaurants })
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// Look up a record by id, as `GET /api/restaurants/{id}` would.
    pub fn get(&self, id: u64) -> Option<&RestaurantRecord> {
        self.restaurants.iter().find(|r| r.id == id)
    }
}

/// Load and validate a dataset file.
pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    let records: Vec<RestaurantRecord> = serde_json::from_str(&content)?;
    Catalog::from_records(records)
}

/// Lifecycle of a dataset arriving from an external source.
#[derive(Debug, Clone)]
pub enum CatalogState {
    /// Requested but not yet arrived. Distinct from an empty result set.
    Loading,
    Ready(Catalog),
    /// The fetch failed. The message is user-visible.
    Failed(String),
}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Records to render, once the dataset has arrived.
    pub fn records(&self) -> Option<&[RestaurantRecord]> {
        match self {
            Self::Ready(catalog) => Some(&catalog.restaurants),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{record, sample_records};

    #[test]
    fn loads_valid_dataset() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("restaurants.json");
        let json = serde_json::to_string_pretty(&sample_records()).unwrap();
        std::fs::write(&path, json).unwrap();

        let catalog = load(&path).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get(2).unwrap().name, "Royal Mandhi Palace");
    }

    #[test]
    fn missing_file_is_not_found() {
        let result = load(Path::new("/nonexistent/restaurants.json"));
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn garbage_json_is_a_json_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("restaurants.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(load(&path), Err(CatalogError::Json(_))));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let records = vec![
            record(1, "Hyderabadi Biryani House", "Downtown"),
            record(1, "Royal Mandhi Palace", "Heritage District"),
        ];
        assert!(matches!(
            Catalog::from_records(records),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn out_of_range_rating_rejected() {
        let mut r = record(3, "Spice Garden", "Food Street");
        r.avg_rating = Some(5.3);
        let result = Catalog::from_records(vec![r]);
        assert!(matches!(
            result,
            Err(CatalogError::RatingOutOfRange { id: 3, .. })
        ));
    }

    #[test]
    fn loading_is_not_empty() {
        let state = CatalogState::Loading;
        assert!(state.is_loading());
        assert!(state.records().is_none());

        let ready = CatalogState::Ready(Catalog::default());
        assert!(!ready.is_loading());
        assert_eq!(ready.records().unwrap().len(), 0);
    }

    #[test]
    fn failed_carries_a_message() {
        let state = CatalogState::Failed("Failed to load restaurants. Please try again.".into());
        assert!(!state.is_loading());
        assert!(state.records().is_none());
        assert!(state.error().unwrap().contains("try again"));
    }
}
