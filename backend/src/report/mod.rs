//! Run summary printed after extraction.

use crate::config::SOUR_STYLE;
use crate::models::Exhibitor;

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub exhibitors: usize,
    pub beverages: usize,
    /// Beverages whose style is exactly the sour style.
    pub sours: usize,
}

impl Summary {
    pub fn from_exhibitors(exhibitors: &[Exhibitor]) -> Self {
        let beverages = exhibitors.iter().flat_map(|e| &e.beverages);

        Self {
            exhibitors: exhibitors.len(),
            beverages: beverages.clone().count(),
            sours: beverages.filter(|b| b.style == SOUR_STYLE).count(),
        }
    }

    /// Console lines, in print order.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("{} breweries with {} beers", self.exhibitors, self.beverages),
            format!("{} sours", self.sours),
        ]
    }

    /// Print the summary to stdout.
    pub fn print(&self) {
        for line in self.lines() {
            println!("{}", line);
        }
    }
}
