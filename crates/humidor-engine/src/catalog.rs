use std::fmt;
use std::str::FromStr;

use humidor_types::Cigar;
use serde::{Deserialize, Serialize};

use crate::aggregate::{Bucket, compare_labels, group_by};

/// Bucket label for records that match no category.
pub const OTHER_COUNTRIES_LABEL: &str = "Other Countries";

/// Countries that get their own browse shortcut. The `Other` filter excludes
/// exactly these unless configured otherwise.
pub const FEATURED_COUNTRIES: [&str; 5] = ["Dominican Republic", "Nicaragua", "Honduras", "USA", "Cuba"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryCategory {
    pub country: &'static str,
    pub label: &'static str,
}

const fn category(country: &'static str, label: &'static str) -> CountryCategory {
    CountryCategory { country, label }
}

pub const COUNTRY_CATEGORIES: [CountryCategory; 17] = [
    category("Dominican Republic", "Dominican Cigars"),
    category("Nicaragua", "Nicaraguan Cigars"),
    category("Honduras", "Honduran Cigars"),
    category("USA", "American Cigars"),
    category("Cuba", "Cuban Cigars"),
    category("Mexico", "Mexican Cigars"),
    category("Ecuador", "Ecuadorian Cigars"),
    category("Peru", "Peruvian Cigars"),
    category("Costa Rica", "Costa Rican Cigars"),
    category("Panama", "Panamanian Cigars"),
    category("Brazil", "Brazilian Cigars"),
    category("Colombia", "Colombian Cigars"),
    category("Jamaica", "Jamaican Cigars"),
    category("Philippines", "Philippine Cigars"),
    category("Indonesia", "Indonesian Cigars"),
    category("Cameroon", "Cameroonian Cigars"),
    category("Canary Islands", "Canary Islands Cigars"),
];

/// Which list the `Other` country filter excludes.
///
/// `Featured` keeps the five-country shortcut list, so a Peruvian cigar shows
/// under "Peruvian Cigars" in the category panel and also under `Other`.
/// `Catalog` excludes every categorised country, making the two views agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtherCountryScope {
    #[default]
    Featured,
    Catalog,
}

impl fmt::Display for OtherCountryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OtherCountryScope::Featured => write!(f, "featured"),
            OtherCountryScope::Catalog => write!(f, "catalog"),
        }
    }
}

impl FromStr for OtherCountryScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "featured" => Ok(OtherCountryScope::Featured),
            "catalog" => Ok(OtherCountryScope::Catalog),
            other => Err(format!(
                "unknown country scope '{}': expected featured or catalog",
                other
            )),
        }
    }
}

/// Single source of truth for country grouping and the `Other` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountryCatalog {
    scope: OtherCountryScope,
}

impl CountryCatalog {
    pub fn new(scope: OtherCountryScope) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> OtherCountryScope {
        self.scope
    }

    pub fn categories(&self) -> &'static [CountryCategory] {
        &COUNTRY_CATEGORIES
    }

    pub fn category_for(&self, country: &str) -> Option<&'static CountryCategory> {
        COUNTRY_CATEGORIES
            .iter()
            .find(|category| category.country.eq_ignore_ascii_case(country.trim()))
    }

    pub fn category_by_label(&self, label: &str) -> Option<&'static CountryCategory> {
        COUNTRY_CATEGORIES
            .iter()
            .find(|category| category.label.eq_ignore_ascii_case(label.trim()))
    }

    /// Countries the `Other` filter treats as named.
    pub fn named_countries(&self) -> Vec<&'static str> {
        match self.scope {
            OtherCountryScope::Featured => FEATURED_COUNTRIES.to_vec(),
            OtherCountryScope::Catalog => COUNTRY_CATEGORIES.iter().map(|c| c.country).collect(),
        }
    }

    /// Whether a record with this country belongs under `Other`.
    /// A missing country always does.
    pub fn is_other(&self, country: Option<&str>) -> bool {
        match country {
            None => true,
            Some(country) => !self
                .named_countries()
                .iter()
                .any(|named| named.eq_ignore_ascii_case(country.trim())),
        }
    }

    /// Stock per country category, alphabetical, with unmatched or missing
    /// countries collected under "Other Countries".
    pub fn group_categories(&self, cigars: &[Cigar]) -> Vec<Bucket> {
        let mut buckets = group_by(cigars, |cigar| {
            cigar
                .country
                .as_deref()
                .and_then(|country| self.category_for(country))
                .map(|category| category.label)
                .unwrap_or(OTHER_COUNTRIES_LABEL)
                .to_string()
        });
        buckets.sort_by(|a, b| compare_labels(&a.label, &b.label));
        buckets
    }
}
