//! Fixed run configuration.
//!
//! The export is processed the same way every year it is regenerated, so
//! paths and lookup tables are compiled in rather than read at runtime.

/// Raw exhibitor export downloaded from the festival website.
pub const INPUT_PATH: &str = "./official_website_breweries_2023.json";

/// Cleaned breweries document, overwritten on every run.
pub const OUTPUT_PATH: &str = "./breweries_2023.json";

/// Exhibitors whose export rows are known to be unusable.
pub const EXCLUDED_EXHIBITORS: &[&str] = &["12 West Brewing"];

/// Registration status value for exhibitors attending this year.
pub const CONFIRMED_STATUS: &str = "Confirmed";

/// Exhibitor categories that are allowed to pour nothing.
pub const NON_BEVERAGE_CATEGORIES: &[&str] = &[
    "Competition Badges",
    "Judges",
    "Volunteer Captains",
    "Paired Staff",
];

/// Highest entry index scanned in each beverage category.
pub const MAX_ENTRIES_PER_CATEGORY: usize = 15;

/// Style counted by the sours line of the run summary.
pub const SOUR_STYLE: &str = "Sour Ales, Brett Beers & Lambics";

/// Input field names.
pub mod fields {
    pub const COMPANY: &str = "company";
    pub const WEBSITE: &str = "website";
    pub const REGISTRATION_STATUS: &str = "registrationstatus";
    pub const CATEGORY: &str = "category_reportname";

    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const COUNTRY: &str = "country";
    pub const REGION: &str = "brewery_region";

    pub const ISLAND: &str = "island";
    pub const BOOTH: &str = "booth";
    pub const TAPROOMS_FEST_BREWERY: &str = "addl_taprooms_fest_brewery";
    pub const TAPROOMS_DONATE_BEER: &str = "addl_taprooms_donate_beer";
}
