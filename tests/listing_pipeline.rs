//! End-to-end listing pipeline: dataset file → filter/sort → shareable params.

use mandhi_town::ranking::{self, FilterState, SortKey};
use mandhi_town::{catalog, query};
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/restaurants.json")
}

fn ids(records: &[&mandhi_town::types::RestaurantRecord]) -> Vec<u64> {
    records.iter().map(|r| r.id).collect()
}

#[test]
fn fixture_dataset_loads_and_validates() {
    let catalog = catalog::load(&fixture_path()).unwrap();
    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.get(2).unwrap().name, "Royal Mandhi Palace");
}

#[test]
fn default_rank_orders_by_effective_rating() {
    let catalog = catalog::load(&fixture_path()).unwrap();
    let ranked = ranking::rank(&catalog.restaurants, &FilterState::new());
    // avg_rating beats legacy rating where both exist (1 ranks at 4.7, 4 at 4.4).
    assert_eq!(ids(&ranked), vec![6, 1, 2, 3, 4, 5]);
}

#[test]
fn query_and_category_narrow_the_listing() {
    let catalog = catalog::load(&fixture_path()).unwrap();

    let state = query::parse("q=mandhi");
    let ranked = ranking::rank(&catalog.restaurants, &state);
    assert_eq!(ids(&ranked), vec![6, 2, 3, 4, 5]);

    let state = query::parse("meats=chicken&sort=name_asc");
    let ranked = ranking::rank(&catalog.restaurants, &state);
    assert_eq!(ids(&ranked), vec![6, 1, 2, 4]);
}

#[test]
fn params_round_trip_reproduces_the_listing() {
    let catalog = catalog::load(&fixture_path()).unwrap();
    let state = FilterState {
        query: "mandhi".into(),
        active_categories: vec!["chicken".into(), "fish".into()],
        city: None,
        sort: SortKey::ReviewsDesc,
    };

    let direct = ranking::rank(&catalog.restaurants, &state);
    let reparsed = query::parse(&query::serialize(&state));
    let via_params = ranking::rank(&catalog.restaurants, &reparsed);

    assert_eq!(ids(&direct), ids(&via_params));
    assert!(!direct.is_empty());
}

#[test]
fn leaderboard_scores_and_truncates() {
    let catalog = catalog::load(&fixture_path()).unwrap();

    let full = ranking::leaderboard(&catalog.restaurants, &FilterState::new(), usize::MAX);
    let top3 = ranking::leaderboard(&catalog.restaurants, &FilterState::new(), 3);

    // Well-reviewed 4.6 outranks the barely-reviewed 4.9.
    assert_eq!(full[0].record.id, 2);
    assert_eq!(full[0].score, 0.936);
    assert_eq!(full[1].record.id, 1);

    assert_eq!(top3.len(), 3);
    for (a, b) in top3.iter().zip(full.iter()) {
        assert_eq!(a.record.id, b.record.id);
    }
}

#[test]
fn city_filter_scopes_the_leaderboard() {
    let catalog = catalog::load(&fixture_path()).unwrap();
    let state = query::parse("city=pala&sort=score");
    let entries = ranking::leaderboard(&catalog.restaurants, &state, 10);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].record.id, 6);
    // Alone in its set, its own review count is the normalization maximum.
    assert_eq!(entries[0].score, 0.984);
}
