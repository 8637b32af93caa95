//! Brewfest CLI - clean the festival exhibitor export
//!
//! ```bash
//! brewfest    # ./official_website_breweries_2023.json -> ./breweries_2023.json
//! ```
//!
//! Paths are fixed; set `RUST_LOG` to change log verbosity.

use brewfest::logs::init_logging;
use brewfest::{run_default, PipelineError};
use clap::Parser;

#[derive(Parser)]
#[command(name = "brewfest")]
#[command(version, long_about = None)]
#[command(about = "Clean the festival exhibitor export into breweries JSON")]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    init_logging();

    if let Err(e) = run_default() {
        // Printed directly so no log filter can hide why the run stopped.
        eprintln!("{}", failure_line(&e));
        std::process::exit(1);
    }
}

fn failure_line(e: &PipelineError) -> String {
    format!("❌ Error: {}", e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewfest::IntegrityError;

    #[test]
    fn test_failure_line_carries_offending_row() {
        let err: PipelineError = IntegrityError::NoBeverages {
            name: "Dry Dock".into(),
            category: "Taproom".into(),
            row: r#"{"company":"Dry Dock","category_reportname":"Taproom"}"#.into(),
        }
        .into();

        let line = failure_line(&err);
        assert!(line.starts_with("❌ Error: Integrity error:"));
        assert!(line.contains(r#""company":"Dry Dock""#));
    }
}
