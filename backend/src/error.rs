//! Error types for the brewery export pipeline.
//!
//! - [`LoadError`] - reading and decoding the raw export
//! - [`IntegrityError`] - data-quality assertions on confirmed exhibitors
//! - [`OutputError`] - writing the cleaned document
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Conversion into [`PipelineError`] is automatic via `From`, so `?` works
//! across stage boundaries.

use thiserror::Error;

// =============================================================================
// Load Errors
// =============================================================================

/// Errors while reading the raw exhibitor export.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read file.
    #[error("Failed to read export: {0}")]
    Io(#[from] std::io::Error),

    /// Export is not valid JSON.
    #[error("Invalid JSON in export: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level value is not an array.
    #[error("Export must be a JSON array of exhibitors, found {0}")]
    NotAnArray(&'static str),

    /// An array element is not an object.
    #[error("Exhibitor at index {index} is not a JSON object")]
    RowNotObject { index: usize },
}

// =============================================================================
// Integrity Errors
// =============================================================================

/// A confirmed exhibitor failed a data-quality assertion.
///
/// These are never recovered from: the export is fixed at the source and the
/// run is repeated.
#[derive(Debug, Error)]
pub enum IntegrityError {
    /// Exhibitor yielded no beverages and is not a non-beverage category.
    #[error("No beers for '{name}' (category: {category}): {row}")]
    NoBeverages {
        name: String,
        category: String,
        /// Full raw input row as JSON.
        row: String,
    },
}

// =============================================================================
// Output Errors
// =============================================================================

/// Errors while writing the cleaned document.
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline errors, returned by [`crate::transform::pipeline::run`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Load error.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Integrity error.
    #[error("Integrity error: {0}")]
    Integrity(#[from] IntegrityError),

    /// Output error.
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for integrity checks.
pub type IntegrityResult<T> = Result<T, IntegrityError>;

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
