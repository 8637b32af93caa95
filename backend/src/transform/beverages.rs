//! Beverage extraction from positionally-numbered export fields.
//!
//! The export stores each beverage category as a run of indexed fields:
//!
//! ```text
//! beer_1_name, beer_1_style, beer_1_abv, beer_2_name, ...
//! fb_beer_1_name, fb_beer_1_style, fb_beer_1_abv, ...
//! heavy_medal_beer_1_name, hm_beer_1_style, hm_beer_1_abv, ...
//! ```
//!
//! A category is read index by index until the first missing name.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::config::MAX_ENTRIES_PER_CATEGORY;
use crate::logs::log_debug_indent;
use crate::models::Beverage;
use crate::parser::RawRow;

/// Field prefixes for one beverage category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeverageCategory {
    pub label: &'static str,
    pub name_prefix: Option<&'static str>,
    pub style_prefix: Option<&'static str>,
    pub abv_prefix: Option<&'static str>,
}

impl BeverageCategory {
    const fn uniform(label: &'static str, prefix: &'static str) -> Self {
        Self {
            label,
            name_prefix: Some(prefix),
            style_prefix: Some(prefix),
            abv_prefix: Some(prefix),
        }
    }
}

/// All categories, in output order.
pub const CATEGORIES: [BeverageCategory; 8] = [
    BeverageCategory {
        label: "Regular",
        name_prefix: None,
        style_prefix: None,
        abv_prefix: None,
    },
    BeverageCategory::uniform("Featured", "fb"),
    BeverageCategory::uniform("Wish We Were Here", "wwwh"),
    BeverageCategory {
        label: "Heavy Medal",
        name_prefix: Some("heavy_medal"),
        style_prefix: Some("hm"),
        abv_prefix: Some("hm"),
    },
    BeverageCategory::uniform("Gluten Free", "gf"),
    BeverageCategory::uniform("Non-Alcoholic", "na"),
    BeverageCategory::uniform("Guild Thursday/Friday", "thurs_fri"),
    BeverageCategory::uniform("Guild Saturday", "saturday"),
];

/// Style prefix whose first entry lives under a different key.
const THURS_FRI_PREFIX: &str = "thurs_fri";
const THURS_FRI_FIRST_STYLE_FIELD: &str = "thurs_fri_guild_beer_1_style";

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[+-]?(?:\d+(?:\.\d+)?|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("leading number pattern is valid")
});

/// `"{prefix}_beer"`, or `"beer"` without a prefix.
pub fn field_template(prefix: Option<&str>) -> String {
    match prefix {
        Some(prefix) => format!("{}_beer", prefix),
        None => "beer".to_string(),
    }
}

/// Key holding the style of entry `index`.
fn style_field(category: &BeverageCategory, index: usize) -> String {
    if category.style_prefix == Some(THURS_FRI_PREFIX) && index == 1 {
        return THURS_FRI_FIRST_STYLE_FIELD.to_string();
    }
    format!("{}_{}_style", field_template(category.style_prefix), index)
}

/// Permissive ABV parse: the longest leading finite number, else 0.0.
pub fn parse_abv(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => LEADING_NUMBER
            .find(s)
            .and_then(|m| m.as_str().trim_start().parse::<f64>().ok()),
        _ => None,
    };

    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Remove non-breaking spaces from a style.
pub fn clean_style(style: &str) -> String {
    style.replace('\u{00A0}', "")
}

/// Extract the entries of one category, stopping at the first missing name.
pub fn extract_category(row: &RawRow, category: &BeverageCategory) -> Vec<Beverage> {
    let name_template = field_template(category.name_prefix);
    let abv_template = field_template(category.abv_prefix);

    let mut beverages = Vec::new();

    for index in 1..=MAX_ENTRIES_PER_CATEGORY {
        let name = match row.text(&format!("{}_{}_name", name_template, index)) {
            Some(name) => name,
            None => break,
        };

        let style = row
            .text(&style_field(category, index))
            .map(|s| clean_style(&s))
            .unwrap_or_default();
        let abv = parse_abv(row.get(&format!("{}_{}_abv", abv_template, index)));

        beverages.push(Beverage::new(name, style, abv));
    }

    beverages
}

/// Extract every beverage of an exhibitor, category by category.
pub fn extract_beverages(row: &RawRow) -> Vec<Beverage> {
    let mut beverages = Vec::new();

    for category in &CATEGORIES {
        let entries = extract_category(row, category);
        if !entries.is_empty() {
            log_debug_indent(format!("{}: {}", category.label, entries.len()), 1);
        }
        beverages.extend(entries);
    }

    beverages
}
