//! Domain models for the brewery export pipeline.
//!
//! - [`Exhibitor`] - a confirmed festival exhibitor with its beverages
//! - [`Beverage`] - one poured beverage entry
//! - [`ActualLocation`] - where the brewery actually is
//! - [`FestivalLocation`] - where it pours at the festival
//!
//! The serde shape of these types is the output document shape. Absent
//! optional fields serialize as `null`.

use serde::Serialize;

// =============================================================================
// Beverage
// =============================================================================

/// A single beverage entry.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Beverage {
    pub name: String,
    /// Style with non-breaking spaces removed.
    pub style: String,
    /// Alcohol by volume, 0.0 when the export had no usable number.
    pub abv: f64,
}

impl Beverage {
    pub fn new(name: impl Into<String>, style: impl Into<String>, abv: f64) -> Self {
        Self {
            name: name.into(),
            style: style.into(),
            abv,
        }
    }
}

// =============================================================================
// Locations
// =============================================================================

/// Physical location of the brewery.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct ActualLocation {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
}

impl ActualLocation {
    pub fn new(
        city: Option<String>,
        state: Option<String>,
        country: Option<String>,
        region: Option<String>,
    ) -> Self {
        Self {
            city,
            state,
            country,
            region,
        }
    }
}

/// Festival logistics for an exhibitor.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct FestivalLocation {
    pub island: Option<String>,
    pub booth: Option<String>,
    /// Deduplicated, in order of first appearance.
    pub additional_taprooms: Vec<String>,
}

impl FestivalLocation {
    pub fn new(
        island: Option<String>,
        booth: Option<String>,
        additional_taprooms: Vec<String>,
    ) -> Self {
        Self {
            island,
            booth,
            additional_taprooms,
        }
    }
}

// =============================================================================
// Exhibitor
// =============================================================================

/// A confirmed exhibitor, ready for output.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Exhibitor {
    pub name: String,
    pub website: Option<String>,
    pub actual_location: ActualLocation,
    pub festival_location: FestivalLocation,
    /// Category scan order, then index order within a category.
    #[serde(rename = "beers")]
    pub beverages: Vec<Beverage>,
}

impl Exhibitor {
    pub fn new(
        name: impl Into<String>,
        website: Option<String>,
        beverages: Vec<Beverage>,
        actual_location: ActualLocation,
        festival_location: FestivalLocation,
    ) -> Self {
        Self {
            name: name.into(),
            website,
            actual_location,
            festival_location,
            beverages,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
