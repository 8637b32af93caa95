//! Exhibitor export loader with encoding auto-detection.
//!
//! Reads the raw export into [`RawRow`]s. No festival-specific logic here
//! beyond the row accessors the later stages share.

use serde_json::{Map, Value};
use std::path::Path;

use crate::error::{LoadError, LoadResult};

/// One flat exhibitor row from the export.
///
/// A field counts as present when it exists and is not `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow(Map<String, Value>);

impl RawRow {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Raw value of a present field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Field rendered as text. Strings are returned as-is, other scalars
    /// in their JSON form (`12` -> `"12"`).
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Whole row as compact JSON, for diagnostics.
    pub fn to_json_string(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }
}

impl TryFrom<Value> for RawRow {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

/// Result of loading the export, with metadata
#[derive(Debug, Clone)]
pub struct LoadedExport {
    pub rows: Vec<RawRow>,
    /// Detected encoding
    pub encoding: String,
}

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 always wins; chardet is consulted only for legacy exports.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let charset = chardet::detect(bytes).0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to string using the specified encoding
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    // Windows-1252 agrees with Latin-1 on every printable byte.
    let text = match encoding.to_lowercase().as_str() {
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" | "cp1252" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
        }
        _ => String::from_utf8_lossy(bytes).into_owned(),
    };

    match text.strip_prefix('\u{FEFF}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

/// Parse export text into rows.
///
/// # Example
/// ```ignore
/// use brewfest::parser::parse_rows;
///
/// let rows = parse_rows(r#"[{"company": "Hop Island", "booth": 12}]"#).unwrap();
/// assert_eq!(rows[0].text("booth").as_deref(), Some("12"));
/// ```
pub fn parse_rows(content: &str) -> LoadResult<Vec<RawRow>> {
    let value: Value = serde_json::from_str(content)?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(_) => return Err(LoadError::NotAnArray("an object")),
        Value::String(_) => return Err(LoadError::NotAnArray("a string")),
        Value::Number(_) => return Err(LoadError::NotAnArray("a number")),
        Value::Bool(_) => return Err(LoadError::NotAnArray("a boolean")),
        Value::Null => return Err(LoadError::NotAnArray("null")),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            RawRow::try_from(item).map_err(|_| LoadError::RowNotObject { index })
        })
        .collect()
}

/// Load export bytes with encoding auto-detection.
pub fn load_bytes(bytes: &[u8]) -> LoadResult<LoadedExport> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let rows = parse_rows(&content)?;

    Ok(LoadedExport { rows, encoding })
}

/// Load the export file at `path`.
pub fn load_export<P: AsRef<Path>>(path: P) -> LoadResult<LoadedExport> {
    let bytes = std::fs::read(path.as_ref())?;
    load_bytes(&bytes)
}
