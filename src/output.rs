//! CLI output formatting.
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! Display is information-first: the header line carries a positional index
//! and the restaurant's identity; rating, review volume, and cuisine follow
//! as indented context.
//!
//! ```text
//! Showing 3 of 12 places
//! 001 Royal Mandhi Palace — Heritage District
//!     Rating 4.6 (128 reviews) · Arabian Cuisine
//! ```

use crate::catalog::Catalog;
use crate::ranking::ScoredEntry;
use crate::types::RestaurantRecord;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn record_header(index: usize, record: &RestaurantRecord) -> String {
    format!(
        "{} {} — {}",
        format_index(index),
        record.name,
        record.location
    )
}

fn record_context(record: &RestaurantRecord) -> String {
    format!(
        "    Rating {:.1} ({} reviews) · {}",
        record.effective_rating(),
        record.review_count,
        record.kind
    )
}

/// Format a ranked listing. `total` is the unfiltered dataset size.
pub fn format_listing(records: &[&RestaurantRecord], total: usize) -> Vec<String> {
    let mut lines = vec![format!("Showing {} of {} places", records.len(), total)];
    for (pos, record) in records.iter().enumerate() {
        lines.push(record_header(pos + 1, record));
        lines.push(record_context(record));
    }
    lines
}

/// Format a leaderboard with the weighted score on each entry.
pub fn format_leaderboard(entries: &[ScoredEntry]) -> Vec<String> {
    if entries.is_empty() {
        return vec!["No restaurants matched".to_string()];
    }
    let mut lines = Vec::new();
    for (pos, entry) in entries.iter().enumerate() {
        lines.push(format!(
            "{}  Score {:.3}",
            record_header(pos + 1, entry.record),
            entry.score
        ));
        lines.push(record_context(entry.record));
    }
    lines
}

/// Format a dataset validation summary.
pub fn format_check(catalog: &Catalog) -> Vec<String> {
    let rated = catalog
        .restaurants
        .iter()
        .filter(|r| r.rating.is_some() || r.avg_rating.is_some())
        .count();
    let with_specialties = catalog
        .restaurants
        .iter()
        .filter(|r| !r.specialties.is_empty())
        .count();
    vec![
        format!("{} restaurants", catalog.len()),
        format!("    {} rated, {} with specialties", rated, with_specialties),
    ]
}

pub fn print_listing(records: &[&RestaurantRecord], total: usize) {
    for line in format_listing(records, total) {
        println!("{}", line);
    }
}

pub fn print_leaderboard(entries: &[ScoredEntry]) {
    for line in format_leaderboard(entries) {
        println!("{}", line);
    }
}

pub fn print_check(catalog: &Catalog) {
    for line in format_check(catalog) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::{FilterState, leaderboard};
    use crate::test_helpers::{rated, sample_records};

    #[test]
    fn listing_counts_and_indexes() {
        let records = sample_records();
        let refs: Vec<&RestaurantRecord> = records.iter().take(2).collect();
        let lines = format_listing(&refs, records.len());

        assert_eq!(lines[0], "Showing 2 of 4 places");
        assert!(lines[1].starts_with("001 Hyderabadi Biryani House — "));
        assert!(lines[2].contains("Rating 4.8"));
        assert!(lines[3].starts_with("002 Royal Mandhi Palace — "));
    }

    #[test]
    fn leaderboard_shows_three_decimal_scores() {
        let records = vec![rated(1, "A", 4.0, 100), rated(2, "B", 5.0, 0)];
        let entries = leaderboard(&records, &FilterState::new(), 10);
        let lines = format_leaderboard(&entries);

        assert!(lines[0].starts_with("001 A"));
        assert!(lines[0].ends_with("Score 0.840"));
        assert!(lines[2].starts_with("002 B"));
        assert!(lines[2].ends_with("Score 0.800"));
    }

    #[test]
    fn empty_leaderboard_has_a_message() {
        let lines = format_leaderboard(&[]);
        assert_eq!(lines, vec!["No restaurants matched".to_string()]);
    }

    #[test]
    fn check_summarizes_the_dataset() {
        let catalog = Catalog::from_records(sample_records()).unwrap();
        let lines = format_check(&catalog);
        assert_eq!(lines[0], "4 restaurants");
        assert!(lines[1].contains("4 rated"));
    }
}
