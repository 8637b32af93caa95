//! # Brewfest - festival exhibitor export cleanup
//!
//! Turns the flat exhibitor export from the festival website into a nested
//! breweries document: one record per confirmed exhibitor, with every beer
//! it pours.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Export JSON │────▶│   Parser    │────▶│  Transform  │────▶│  Breweries  │
//! │ (flat rows) │     │  (auto-enc) │     │ (filter+ex) │     │    JSON     │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use brewfest::run_default;
//!
//! fn main() {
//!     let result = run_default().unwrap();
//!     println!("Wrote {} breweries", result.exhibitors.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Fixed paths and lookup tables
//! - [`error`] - Hierarchical error types
//! - [`logs`] - Progress logging
//! - [`models`] - Domain models (Exhibitor, Beverage, locations)
//! - [`parser`] - Export loading with encoding detection
//! - [`transform`] - Filter, extraction and pipeline
//! - [`validation`] - Integrity guard
//! - [`report`] - Run summary
//! - [`output`] - Breweries document writer

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Loading
pub mod parser;

// Transformation
pub mod transform;

// Validation
pub mod validation;

// Reporting and output
pub mod output;
pub mod report;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{IntegrityError, LoadError, OutputError, PipelineError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{ActualLocation, Beverage, Exhibitor, FestivalLocation};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{load_bytes, load_export, parse_rows, LoadedExport, RawRow};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{build_exhibitor, process_rows, run, run_default, RunResult};

pub use report::Summary;
