//! Transformation module.
//!
//! - Filter: which export rows are this year's exhibitors
//! - Beverages: indexed beverage fields to beverage records
//! - Location: actual and festival locations
//! - Pipeline: the full run

pub mod beverages;
pub mod filter;
pub mod location;
pub mod pipeline;

pub use beverages::{extract_beverages, BeverageCategory, CATEGORIES};
pub use filter::{filter_exhibitor, FilterDecision, SkipReason};
pub use location::{extract_actual_location, extract_festival_location};
pub use pipeline::*;
