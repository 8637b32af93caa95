//! Serialize exhibitors into the breweries document.
//!
//! # Output Format
//!
//! ```text
//! [
//!   {
//!     "name": ..., "website": ...,
//!     "actual_location": { "city", "state", "country", "region" },
//!     "festival_location": { "island", "booth", "additional_taprooms": [..] },
//!     "beers": [ { "name", "style", "abv" }, .. ]
//!   }
//! ]
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::OutputResult;
use crate::models::Exhibitor;

/// Render exhibitors as a compact JSON array.
pub fn to_json(exhibitors: &[Exhibitor]) -> OutputResult<String> {
    Ok(serde_json::to_string(exhibitors)?)
}

/// Replace the file at `path` with the rendered document.
pub fn write_output(path: &Path, exhibitors: &[Exhibitor]) -> OutputResult<()> {
    let json = to_json(exhibitors)?;

    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActualLocation, Beverage, FestivalLocation};
    use serde_json::{json, Value};

    fn sample() -> Vec<Exhibitor> {
        vec![Exhibitor::new(
            "Hop Island",
            None,
            vec![
                Beverage::new("Tidal IPA", "IPA", 6.5),
                Beverage::new("Mystery", "", 0.0),
            ],
            ActualLocation::default(),
            FestivalLocation::new(None, Some("12".into()), vec!["A".into(), "B".into()]),
        )]
    }

    #[test]
    fn test_to_json_preserves_beer_order() {
        let json = to_json(&sample()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["beers"][0]["name"], "Tidal IPA");
        assert_eq!(value[0]["beers"][1]["name"], "Mystery");
        assert_eq!(value[0]["beers"][1]["abv"], json!(0.0));
        assert_eq!(value[0]["festival_location"]["additional_taprooms"], json!(["A", "B"]));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_write_output_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("breweries.json");
        fs::write(&path, "stale content that is much longer than the new document").unwrap();

        write_output(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");

        write_output(&path, &sample()).unwrap();
        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
    }
}
