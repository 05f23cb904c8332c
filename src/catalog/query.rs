//! Field filters for `Catalog::search`.

use super::record::{SneakerRecord, Year};

/// Brand filter value that means "any brand".
pub const ALL_BRANDS: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub brand: Option<String>,
    pub year: Option<Year>,
}

impl SearchFilters {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_year(mut self, year: Year) -> Self {
        self.year = Some(year);
        self
    }

    /// Brand filter, unless absent, blank or the "all" sentinel.
    fn active_brand(&self) -> Option<&str> {
        self.brand
            .as_deref()
            .filter(|b| !b.trim().is_empty() && *b != ALL_BRANDS)
    }

    /// Normalized year filter, unless absent or blank.
    fn active_year(&self) -> Option<String> {
        self.year
            .as_ref()
            .map(Year::normalized)
            .filter(|y| !y.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.active_brand().is_none() && self.active_year().is_none()
    }

    pub(crate) fn matches(&self, record: &SneakerRecord) -> bool {
        if let Some(brand) = self.active_brand() {
            if record.brand != brand {
                return false;
            }
        }

        if let Some(year) = self.active_year() {
            if record.year.normalized() != year {
                return false;
            }
        }

        true
    }
}
