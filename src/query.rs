//! Shareable query-string encoding of filter state.
//!
//! Listings keep their filter selection in the page URL so results can be
//! shared and reloaded: `q` carries the search text, `meats` the comma-joined
//! active categories, `city` the leaderboard city, and `sort` the sort key.
//! Defaults are omitted, so a pristine state serializes to an empty string.
//!
//! Parsing is deliberately forgiving — unknown keys are ignored and
//! malformed values fall back to defaults. A garbage query string yields the
//! default state, never an error.

use crate::ranking::{FilterState, SortKey};
use urlencoding::{decode, encode};

/// Serialize filter state as a URL query string (no leading `?`).
pub fn serialize(state: &FilterState) -> String {
    let mut params: Vec<String> = Vec::new();

    let q = state.query.trim();
    if !q.is_empty() {
        params.push(format!("q={}", encode(q)));
    }

    let categories: Vec<String> = state
        .active_categories
        .iter()
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty())
        .collect();
    if !categories.is_empty() {
        params.push(format!("meats={}", encode(&categories.join(","))));
    }

    if let Some(city) = state.city.as_deref() {
        let city = city.trim().to_lowercase();
        if !city.is_empty() {
            params.push(format!("city={}", encode(&city)));
        }
    }

    if state.sort != SortKey::default() {
        params.push(format!("sort={}", state.sort.as_str()));
    }

    params.join("&")
}

/// Parse a query string back into filter state. Never fails.
pub fn parse(query_string: &str) -> FilterState {
    let mut state = FilterState::new();
    let trimmed = query_string.trim().trim_start_matches('?');

    for pair in trimmed.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, value),
            None => continue,
        };
        let value = match decode(value) {
            Ok(value) => value.into_owned(),
            Err(_) => continue,
        };
        match key {
            "q" => state.query = value,
            "meats" => {
                state.active_categories = value
                    .split(',')
                    .map(|c| c.trim().to_lowercase())
                    .filter(|c| !c.is_empty())
                    .collect();
            }
            "city" => {
                let city = value.trim().to_lowercase();
                // "all" is the UI's no-filter sentinel.
                if !city.is_empty() && city != "all" {
                    state.city = Some(city);
                }
            }
            "sort" => state.sort = SortKey::parse(&value).unwrap_or_default(),
            _ => {}
        }
    }

    state
}
