//! Actual and festival location projection.

use std::collections::HashSet;

use crate::config::fields;
use crate::models::{ActualLocation, FestivalLocation};
use crate::parser::RawRow;

/// Project the brewery's home location. No validation.
pub fn extract_actual_location(row: &RawRow) -> ActualLocation {
    ActualLocation::new(
        row.text(fields::CITY),
        row.text(fields::STATE),
        row.text(fields::COUNTRY),
        row.text(fields::REGION),
    )
}

/// Project booth, island and the additional taprooms.
pub fn extract_festival_location(row: &RawRow) -> FestivalLocation {
    let taprooms = [fields::TAPROOMS_FEST_BREWERY, fields::TAPROOMS_DONATE_BEER]
        .iter()
        .filter_map(|key| row.text(key))
        .flat_map(|list| split_taprooms(&list))
        .collect();

    FestivalLocation::new(
        row.text(fields::ISLAND),
        row.text(fields::BOOTH),
        dedup_preserving_order(taprooms),
    )
}

/// Split a comma-separated taproom list, dropping `"` characters.
///
/// Surrounding whitespace is kept: `"A, B"` yields `"A"` and `" B"`.
pub fn split_taprooms(list: &str) -> Vec<String> {
    list.split(',')
        .map(|token| token.replace('"', ""))
        .collect()
}

/// Remove repeated entries, keeping the first occurrence of each.
pub fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
