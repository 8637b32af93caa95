//! High-level pipeline: load, filter, extract, report, write.
//!
//! # Example
//!
//! ```rust,ignore
//! use brewfest::transform::pipeline::run_default;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let result = run_default()?;
//!     println!("{} exhibitors written", result.summary.exhibitors);
//!     Ok(())
//! }
//! ```

use std::path::Path;

use crate::config::{fields, INPUT_PATH, OUTPUT_PATH};
use crate::error::{IntegrityResult, PipelineResult};
use crate::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::models::Exhibitor;
use crate::output::write_output;
use crate::parser::{load_export, RawRow};
use crate::report::Summary;
use crate::validation::ensure_has_beverages;

use super::beverages::extract_beverages;
use super::filter::{filter_exhibitor, FilterDecision};
use super::location::{extract_actual_location, extract_festival_location};

/// Result of a complete run
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Exhibitors written to the output document
    pub exhibitors: Vec<Exhibitor>,
    /// Rows in the export, before filtering
    pub row_count: usize,
    /// Rows dropped by the filter
    pub skipped: usize,
    pub summary: Summary,
}

/// Build the exhibitor for a row that passed the filter.
pub fn build_exhibitor(row: &RawRow) -> IntegrityResult<Exhibitor> {
    let beverages = extract_beverages(row);
    ensure_has_beverages(row, beverages.len())?;

    Ok(Exhibitor::new(
        row.text(fields::COMPANY).unwrap_or_default(),
        row.text(fields::WEBSITE),
        beverages,
        extract_actual_location(row),
        extract_festival_location(row),
    ))
}

/// Filter rows and build exhibitors, in export order.
///
/// Returns the exhibitors and the number of skipped rows. Stops at the first
/// integrity failure.
pub fn process_rows(rows: &[RawRow]) -> IntegrityResult<(Vec<Exhibitor>, usize)> {
    let mut exhibitors = Vec::new();
    let mut skipped = 0;

    for row in rows {
        match filter_exhibitor(row) {
            FilterDecision::Keep => {
                let exhibitor = build_exhibitor(row)?;
                if exhibitor.beverages.is_empty() {
                    log_warning(format!("{} has no beers", exhibitor.name));
                }
                exhibitors.push(exhibitor);
            }
            FilterDecision::Skip(_) => skipped += 1,
        }
    }

    Ok((exhibitors, skipped))
}

/// Run the whole transform from `input` to `output`.
pub fn run(input: &Path, output: &Path) -> PipelineResult<RunResult> {
    log_info(format!("📖 Reading export: {}", input.display()));
    let export = load_export(input)?;
    log_success(format!("Read {} rows ({})", export.rows.len(), export.encoding));

    log_info("⚙️  Extracting exhibitors...");
    let (exhibitors, skipped) = process_rows(&export.rows)?;
    log_success(format!("{} exhibitors kept", exhibitors.len()));
    log_info_indent(format!("{} rows filtered out", skipped), 1);

    let summary = Summary::from_exhibitors(&exhibitors);
    summary.print();

    write_output(output, &exhibitors)?;
    log_success(format!("💾 Output written to: {}", output.display()));

    Ok(RunResult {
        row_count: export.rows.len(),
        exhibitors,
        skipped,
        summary,
    })
}

/// Run with the fixed input and output paths.
pub fn run_default() -> PipelineResult<RunResult> {
    run(Path::new(INPUT_PATH), Path::new(OUTPUT_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use serde_json::{json, Value};
    use std::fs;

    fn rows(value: Value) -> Vec<RawRow> {
        value
            .as_array()
            .unwrap()
            .iter()
            .cloned()
            .map(|v| RawRow::try_from(v).unwrap())
            .collect()
    }

    fn fixture() -> Value {
        json!([
            {
                "company": "12 West Brewing",
                "registrationstatus": "Confirmed",
                "category_reportname": "Taproom"
            },
            {
                "company": "Maybe Brewing",
                "registrationstatus": "Pending",
                "category_reportname": "Taproom"
            },
            {
                "company": "Hop Island",
                "website": "https://hopisland.example",
                "registrationstatus": "Confirmed",
                "category_reportname": "Taproom",
                "city": "Portland",
                "state": "OR",
                "booth": "12",
                "island": "3",
                "addl_taprooms_fest_brewery": "A,B",
                "addl_taprooms_donate_beer": "B,C",
                "beer_1_name": "Tidal IPA",
                "beer_1_style": "IPA",
                "beer_1_abv": "6.5",
                "beer_2_name": "Low Tide",
                "beer_2_style": "Pilsner",
                "beer_2_abv": "abc"
            }
        ])
    }

    #[test]
    fn test_process_rows_filters_before_extraction() {
        // Neither skipped row has beverages; the guard must not see them.
        let (exhibitors, skipped) = process_rows(&rows(fixture())).unwrap();

        assert_eq!(exhibitors.len(), 1);
        assert_eq!(skipped, 2);
        assert_eq!(exhibitors[0].name, "Hop Island");
        assert_eq!(exhibitors[0].beverages.len(), 2);
        assert_eq!(exhibitors[0].beverages[1].abv, 0.0);
    }

    #[test]
    fn test_non_beverage_category_kept_empty() {
        let input = rows(json!([{
            "company": "Judging Panel",
            "registrationstatus": "Confirmed",
            "category_reportname": "Competition Badges"
        }]));

        let (exhibitors, _) = process_rows(&input).unwrap();
        assert_eq!(exhibitors.len(), 1);
        assert!(exhibitors[0].beverages.is_empty());
    }

    #[test]
    fn test_empty_taproom_aborts() {
        let input = rows(json!([
            {
                "company": "Hop Island",
                "registrationstatus": "Confirmed",
                "beer_1_name": "Tidal IPA"
            },
            {
                "company": "Dry Dock",
                "registrationstatus": "Confirmed",
                "category_reportname": "Taproom"
            }
        ]));

        let err = process_rows(&input).unwrap_err();
        assert!(err.to_string().contains("Dry Dock"));
    }

    #[test]
    fn test_run_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("export.json");
        let output = dir.path().join("breweries.json");
        fs::write(&input, fixture().to_string()).unwrap();

        let result = run(&input, &output).unwrap();
        assert_eq!(result.row_count, 3);
        assert_eq!(result.skipped, 2);
        assert_eq!(result.summary.lines(), vec!["1 breweries with 2 beers", "0 sours"]);

        let written: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            written,
            json!([{
                "name": "Hop Island",
                "website": "https://hopisland.example",
                "actual_location": {
                    "city": "Portland",
                    "state": "OR",
                    "country": null,
                    "region": null
                },
                "festival_location": {
                    "island": "3",
                    "booth": "12",
                    "additional_taprooms": ["A", "B", "C"]
                },
                "beers": [
                    { "name": "Tidal IPA", "style": "IPA", "abv": 6.5 },
                    { "name": "Low Tide", "style": "Pilsner", "abv": 0.0 }
                ]
            }])
        );
    }

    #[test]
    fn test_run_counts_sours() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("export.json");
        let output = dir.path().join("breweries.json");
        let export = json!([{
            "company": "Sour Side",
            "registrationstatus": "Confirmed",
            "beer_1_name": "Funk",
            "beer_1_style": "Sour Ales, Brett Beers\u{00A0} & Lambics",
            "fb_beer_1_name": "Clean",
            "fb_beer_1_style": "Lager"
        }]);
        fs::write(&input, export.to_string()).unwrap();

        let result = run(&input, &output).unwrap();
        assert_eq!(result.summary.sours, 1);
        assert_eq!(result.summary.beverages, 2);
    }

    #[test]
    fn test_run_integrity_failure_leaves_output_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("export.json");
        let output = dir.path().join("breweries.json");
        fs::write(&output, "previous").unwrap();
        let export = json!([{
            "company": "Dry Dock",
            "registrationstatus": "Confirmed",
            "category_reportname": "Taproom"
        }]);
        fs::write(&input, export.to_string()).unwrap();

        let err = run(&input, &output).unwrap_err();
        assert!(matches!(err, PipelineError::Integrity(_)));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }
}
