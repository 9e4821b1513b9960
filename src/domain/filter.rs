// src/domain/filter.rs

use crate::domain::listing::ListingRecord;
use crate::domain::query::{CategoryFilter, LocationFilter, PriceBucket, QueryState};

/// Listings matching a query, split for display.
///
/// Both partitions keep the relative order of the source records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResults<'a> {
    pub featured: Vec<&'a ListingRecord>,
    pub regular: Vec<&'a ListingRecord>,
    matched: Vec<&'a ListingRecord>,
}

impl<'a> SearchResults<'a> {
    /// Every match in source order (featured and regular interleaved as in the source).
    pub fn matched(&self) -> &[&'a ListingRecord] {
        &self.matched
    }

    pub fn total(&self) -> usize {
        self.matched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }
}

/// Applies every filter in `query` to `records` and partitions the survivors
/// by their featured flag. Pure: the same inputs always give the same output.
pub fn compute_results<'a>(records: &'a [ListingRecord], query: &QueryState) -> SearchResults<'a> {
    let needle = query.term.to_lowercase();

    let matched: Vec<&ListingRecord> = records
        .iter()
        .filter(|r| matches_term(r, &needle))
        .filter(|r| matches_location(r, &query.location))
        .filter(|r| matches_category(r, query.category))
        .filter(|r| matches_price(r, query.price))
        .collect();

    let (featured, regular): (Vec<_>, Vec<_>) = matched.iter().copied().partition(|r| r.featured);

    SearchResults {
        featured,
        regular,
        matched,
    }
}

/// `needle` must already be lower-cased.
fn matches_term(record: &ListingRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.title.to_lowercase().contains(needle)
        || record.location.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
}

fn matches_location(record: &ListingRecord, filter: &LocationFilter) -> bool {
    match filter {
        LocationFilter::All => true,
        LocationFilter::Area(area) => record.location.contains(area.as_str()),
    }
}

fn matches_category(record: &ListingRecord, filter: CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Only(category) => record.category == category,
    }
}

fn matches_price(record: &ListingRecord, bucket: PriceBucket) -> bool {
    bucket.contains(record.price)
}
