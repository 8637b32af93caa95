//! Data-quality assertions on confirmed exhibitors.
//!
//! Unlike the row filter, a failure here is fatal: the export is fixed at the
//! source and the run repeated.

use crate::config::{fields, NON_BEVERAGE_CATEGORIES};
use crate::error::{IntegrityError, IntegrityResult};
use crate::parser::RawRow;

/// Whether an exhibitor category is allowed to pour nothing.
pub fn is_non_beverage_category(category: Option<&str>) -> bool {
    category.is_some_and(|c| NON_BEVERAGE_CATEGORIES.contains(&c))
}

/// Fail when an exhibitor has no beverages and is not a non-beverage category.
///
/// # Example
/// ```ignore
/// use brewfest::validation::ensure_has_beverages;
///
/// // A judges table pours nothing and that is fine.
/// assert!(ensure_has_beverages(&judges_row, 0).is_ok());
/// ```
pub fn ensure_has_beverages(row: &RawRow, beverage_count: usize) -> IntegrityResult<()> {
    if beverage_count > 0 {
        return Ok(());
    }

    let category = row.text(fields::CATEGORY);
    if is_non_beverage_category(category.as_deref()) {
        return Ok(());
    }

    Err(IntegrityError::NoBeverages {
        name: row.text(fields::COMPANY).unwrap_or_default(),
        category: category.unwrap_or_else(|| "<none>".to_string()),
        row: row.to_json_string(),
    })
}
