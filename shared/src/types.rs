//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Fresh-food department that scopes recipes, staff and supplier catalogs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    #[default]
    Bakery,
    Butchery,
    /// Home Meal Replacement
    Hmr,
}

impl Department {
    /// Parse a department tag from persisted data.
    ///
    /// Accepts canonical names in any casing and the legacy numeric codes
    /// still present in older documents. Unknown values fall back to
    /// [`Department::Bakery`] rather than erroring, since reference lookups
    /// must always resolve to some catalog.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "bakery" | "1" => Department::Bakery,
            "butchery" | "2" => Department::Butchery,
            "hmr" | "home meal replacement" | "3" => Department::Hmr,
            _ => Department::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Bakery => "bakery",
            Department::Butchery => "butchery",
            Department::Hmr => "hmr",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Department::Bakery => "Bakery",
            Department::Butchery => "Butchery",
            Department::Hmr => "HMR",
        }
    }

    /// Country of origin assumed for ingredients with no supplier data
    pub fn default_country(&self) -> &'static str {
        "South Africa"
    }

    pub fn all() -> &'static [Department] {
        &[Department::Bakery, Department::Butchery, Department::Hmr]
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Date range for schedule and audit queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRange {
    pub start: chrono::NaiveDate,
    pub end: chrono::NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        assert_eq!(Department::parse("bakery"), Department::Bakery);
        assert_eq!(Department::parse("BUTCHERY"), Department::Butchery);
        assert_eq!(Department::parse("Hmr"), Department::Hmr);
    }

    #[test]
    fn test_parse_legacy_numeric_codes() {
        assert_eq!(Department::parse("1"), Department::Bakery);
        assert_eq!(Department::parse("2"), Department::Butchery);
        assert_eq!(Department::parse("3"), Department::Hmr);
    }

    #[test]
    fn test_parse_unknown_falls_back() {
        assert_eq!(Department::parse("deli"), Department::Bakery);
        assert_eq!(Department::parse(""), Department::Bakery);
    }

    #[test]
    fn test_parse_long_form_hmr() {
        assert_eq!(Department::parse("Home Meal Replacement"), Department::Hmr);
    }
}
