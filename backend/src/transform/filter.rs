//! Decide which exhibitor rows take part in this year's festival.

use crate::config::{fields, CONFIRMED_STATUS, EXCLUDED_EXHIBITORS};
use crate::parser::RawRow;

/// Outcome of filtering one export row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    Keep,
    Skip(SkipReason),
}

/// Why a row was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No company name.
    MissingName,
    /// Company is on the known-bad list.
    Excluded,
    /// Registration status is not "Confirmed".
    Unconfirmed,
}

/// Filter one row. Never fails and never logs.
pub fn filter_exhibitor(row: &RawRow) -> FilterDecision {
    let name = match row.text(fields::COMPANY) {
        Some(name) => name,
        None => return FilterDecision::Skip(SkipReason::MissingName),
    };

    if EXCLUDED_EXHIBITORS.contains(&name.as_str()) {
        return FilterDecision::Skip(SkipReason::Excluded);
    }

    let confirmed = row
        .get(fields::REGISTRATION_STATUS)
        .and_then(|v| v.as_str())
        .is_some_and(|status| status == CONFIRMED_STATUS);

    if !confirmed {
        return FilterDecision::Skip(SkipReason::Unconfirmed);
    }

    FilterDecision::Keep
}
