use std::fmt;
use std::str::FromStr;

use humidor_types::{Cigar, CigarAttribute, Strength};
use serde::{Serialize, Serializer};

use crate::aggregate::UNKNOWN_LABEL;
use crate::catalog::CountryCatalog;
use crate::navigation::Screen;

/// Value of a strength filter. `Flavored` is not a strength level: it matches
/// records that carry flavor notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthFilter {
    Level(Strength),
    Flavored,
}

impl StrengthFilter {
    pub fn matches(&self, cigar: &Cigar) -> bool {
        match self {
            StrengthFilter::Level(level) => cigar.strength == Some(*level),
            StrengthFilter::Flavored => cigar.is_flavored(),
        }
    }
}

impl fmt::Display for StrengthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthFilter::Level(level) => write!(f, "{}", level),
            StrengthFilter::Flavored => write!(f, "Flavored"),
        }
    }
}

impl FromStr for StrengthFilter {
    type Err = humidor_types::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("flavored") {
            return Ok(StrengthFilter::Flavored);
        }
        s.parse().map(StrengthFilter::Level)
    }
}

impl Serialize for StrengthFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Value of a country filter. `Other` matches every record outside the
/// catalog's named countries, including records without a country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryFilter {
    Named(String),
    Other,
}

impl CountryFilter {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("other") {
            CountryFilter::Other
        } else {
            CountryFilter::Named(value.to_string())
        }
    }

    pub fn matches(&self, cigar: &Cigar, catalog: &CountryCatalog) -> bool {
        match self {
            CountryFilter::Named(name) => matches_value(cigar.country.as_deref(), name),
            CountryFilter::Other => catalog.is_other(cigar.country.as_deref()),
        }
    }
}

impl fmt::Display for CountryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountryFilter::Named(name) => write!(f, "{}", name),
            CountryFilter::Other => write!(f, "Other"),
        }
    }
}

impl Serialize for CountryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The one filter in effect on a cigar list.
///
/// Only one kind can be active, so picking a wrapper after a search replaces
/// the search rather than stacking with it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ActiveFilter {
    #[default]
    None,
    Search(String),
    Brand(String),
    Wrapper(String),
    Strength(StrengthFilter),
    Country(CountryFilter),
    /// Records the "Unknown" bucket of a grouping panel counts.
    Missing(CigarAttribute),
}

impl ActiveFilter {
    /// Search filter; a blank query means no filter.
    pub fn search(query: &str) -> Self {
        let query = query.trim();
        if query.is_empty() {
            ActiveFilter::None
        } else {
            ActiveFilter::Search(query.to_string())
        }
    }

    pub fn brand(brand: &str) -> Self {
        ActiveFilter::Brand(brand.trim().to_string())
    }

    pub fn wrapper(wrapper: &str) -> Self {
        ActiveFilter::Wrapper(wrapper.trim().to_string())
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, ActiveFilter::None)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ActiveFilter::None => "none",
            ActiveFilter::Search(_) => "search",
            ActiveFilter::Brand(_) => "brand",
            ActiveFilter::Wrapper(_) => "wrapper",
            ActiveFilter::Strength(_) => "strength",
            ActiveFilter::Country(_) => "country",
            ActiveFilter::Missing(_) => "missing",
        }
    }

    /// Missing attributes never match an equality filter.
    pub fn matches(&self, cigar: &Cigar, catalog: &CountryCatalog) -> bool {
        match self {
            ActiveFilter::None => true,
            ActiveFilter::Search(query) => matches_search(cigar, query),
            ActiveFilter::Brand(brand) => matches_value(cigar.brand.as_deref(), brand),
            ActiveFilter::Wrapper(wrapper) => matches_value(cigar.wrapper.as_deref(), wrapper),
            ActiveFilter::Strength(strength) => strength.matches(cigar),
            ActiveFilter::Country(country) => country.matches(cigar, catalog),
            ActiveFilter::Missing(attribute) => cigar
                .attribute(*attribute)
                .is_none_or(|value| value == UNKNOWN_LABEL),
        }
    }
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveFilter::None => write!(f, "all cigars"),
            ActiveFilter::Search(query) => write!(f, "search \"{}\"", query),
            ActiveFilter::Brand(brand) => write!(f, "brand: {}", brand),
            ActiveFilter::Wrapper(wrapper) => write!(f, "wrapper: {}", wrapper),
            ActiveFilter::Strength(strength) => write!(f, "strength: {}", strength),
            ActiveFilter::Country(country) => write!(f, "country: {}", country),
            ActiveFilter::Missing(attribute) => write!(f, "no {}", attribute.label()),
        }
    }
}

/// Case-insensitive substring match against name or brand.
pub fn matches_search(cigar: &Cigar, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    [cigar.name.as_deref(), cigar.brand.as_deref()]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

fn matches_value(value: Option<&str>, wanted: &str) -> bool {
    value.is_some_and(|value| value.trim().eq_ignore_ascii_case(wanted.trim()))
}

pub fn apply<'a>(
    cigars: &'a [Cigar],
    filter: &ActiveFilter,
    catalog: &CountryCatalog,
) -> Vec<&'a Cigar> {
    cigars
        .iter()
        .filter(|cigar| filter.matches(cigar, catalog))
        .collect()
}

/// Where the current filter came from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum FilterOrigin {
    /// Picked on the list screen itself.
    #[default]
    Local,
    /// Handed over with a navigation request.
    Navigation { return_to: Screen },
}

/// What the caller must do after clearing a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearOutcome {
    Reset,
    NavigateBack(Screen),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterState {
    filter: ActiveFilter,
    #[serde(flatten)]
    origin: FilterOrigin,
}

impl FilterState {
    pub fn local(filter: ActiveFilter) -> Self {
        Self {
            filter,
            origin: FilterOrigin::Local,
        }
    }

    pub fn from_navigation(filter: ActiveFilter, return_to: Screen) -> Self {
        Self {
            filter,
            origin: FilterOrigin::Navigation { return_to },
        }
    }

    pub fn filter(&self) -> &ActiveFilter {
        &self.filter
    }

    pub fn origin(&self) -> &FilterOrigin {
        &self.origin
    }

    /// Replace the filter with one picked locally.
    pub fn select(&mut self, filter: ActiveFilter) {
        self.filter = filter;
        self.origin = FilterOrigin::Local;
    }

    pub fn clear(&mut self) -> ClearOutcome {
        self.filter = ActiveFilter::None;
        match std::mem::take(&mut self.origin) {
            FilterOrigin::Local => ClearOutcome::Reset,
            FilterOrigin::Navigation { return_to } => ClearOutcome::NavigateBack(return_to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::OtherCountryScope;
    use humidor_types::{CigarId, HumidorId};

    fn sample() -> Vec<Cigar> {
        let rows: [(&str, &str, Option<&str>, Option<Strength>, Option<&str>, &[&str]); 6] = [
            ("Padron", "1964 Anniversary", Some("Maduro"), Some(Strength::MediumFull), Some("Nicaragua"), &[]),
            ("Oliva", "Serie V", Some("Habano"), Some(Strength::Full), Some("nicaragua"), &["Cocoa"]),
            ("Arturo Fuente", "Hemingway", Some("Cameroon"), Some(Strength::Medium), Some("Dominican Republic"), &[]),
            ("Tatuaje", "Havana VI", Some("maduro"), Some(Strength::Full), Some("Peru"), &[]),
            ("Acid", "Kuba Kuba", None, None, None, &["Vanilla", "Herbal"]),
            ("Davidoff", "Signature", Some("Connecticut"), Some(Strength::Mild), Some("usa"), &[]),
        ];

        rows.iter()
            .enumerate()
            .map(|(i, (brand, name, wrapper, strength, country, notes))| {
                let mut cigar = Cigar::new(CigarId::new(format!("c{}", i)), HumidorId::new("h1"));
                cigar.brand = Some(brand.to_string());
                cigar.name = Some(name.to_string());
                cigar.wrapper = wrapper.map(str::to_string);
                cigar.strength = *strength;
                cigar.country = country.map(str::to_string);
                cigar.flavor_notes = notes.iter().map(|n| n.to_string()).collect();
                cigar.quantity = 1;
                cigar
            })
            .collect()
    }

    fn ids(cigars: &[&Cigar]) -> Vec<String> {
        cigars.iter().map(|c| c.id.to_string()).collect()
    }

    #[test]
    fn test_search_matches_name_or_brand_case_insensitive() {
        let cigars = sample();
        let catalog = CountryCatalog::default();
        assert_eq!(ids(&apply(&cigars, &ActiveFilter::search("PADRON"), &catalog)), vec!["c0"]);
        assert_eq!(ids(&apply(&cigars, &ActiveFilter::search("kuba"), &catalog)), vec!["c4"]);
        assert_eq!(apply(&cigars, &ActiveFilter::search("   "), &catalog).len(), 6);
    }

    #[test]
    fn test_wrapper_equality_case_insensitive() {
        let cigars = sample();
        let catalog = CountryCatalog::default();
        let found = apply(&cigars, &ActiveFilter::wrapper("MADURO"), &catalog);
        assert_eq!(ids(&found), vec!["c0", "c3"]);
    }

    #[test]
    fn test_brand_equality_ignores_names() {
        let mut cigars = sample();
        cigars[5].name = Some("Padron Tribute".to_string());
        let catalog = CountryCatalog::default();
        assert_eq!(ids(&apply(&cigars, &ActiveFilter::brand("padron"), &catalog)), vec!["c0"]);
        assert_eq!(
            ids(&apply(&cigars, &ActiveFilter::search("padron"), &catalog)),
            vec!["c0", "c5"]
        );
    }

    #[test]
    fn test_missing_matches_only_absent_attribute() {
        let cigars = sample();
        let catalog = CountryCatalog::default();
        let missing = ActiveFilter::Missing(CigarAttribute::Wrapper);
        assert_eq!(ids(&apply(&cigars, &missing, &catalog)), vec!["c4"]);
        assert!(apply(&cigars, &ActiveFilter::wrapper("Unknown"), &catalog).is_empty());
        assert_eq!(
            serde_json::to_value(&missing).unwrap(),
            serde_json::json!({"kind": "missing", "value": "wrapper"})
        );
    }

    #[test]
    fn test_filters_commute() {
        let cigars = sample();
        let catalog = CountryCatalog::default();
        let wrapper = ActiveFilter::wrapper("maduro");
        let strength = ActiveFilter::Strength(StrengthFilter::Level(Strength::Full));

        let wrapper_then_strength: Vec<Cigar> = apply(&cigars, &wrapper, &catalog)
            .into_iter()
            .cloned()
            .collect();
        let a = apply(&wrapper_then_strength, &strength, &catalog);

        let strength_then_wrapper: Vec<Cigar> = apply(&cigars, &strength, &catalog)
            .into_iter()
            .cloned()
            .collect();
        let b = apply(&strength_then_wrapper, &wrapper, &catalog);

        assert_eq!(ids(&a), ids(&b));
        assert_eq!(ids(&a), vec!["c3"]);
    }

    #[test]
    fn test_flavored_matches_flavor_notes() {
        let cigars = sample();
        let catalog = CountryCatalog::default();
        let flavored = ActiveFilter::Strength(StrengthFilter::Flavored);
        assert_eq!(ids(&apply(&cigars, &flavored, &catalog)), vec!["c1", "c4"]);

        let plain: Vec<Cigar> = cigars
            .into_iter()
            .map(|mut c| {
                c.flavor_notes.clear();
                c
            })
            .collect();
        assert!(apply(&plain, &flavored, &catalog).is_empty());
    }

    #[test]
    fn test_strength_filter_parse() {
        assert_eq!("flavored".parse::<StrengthFilter>(), Ok(StrengthFilter::Flavored));
        assert_eq!(
            "medium-full".parse::<StrengthFilter>(),
            Ok(StrengthFilter::Level(Strength::MediumFull))
        );
        assert!("spicy".parse::<StrengthFilter>().is_err());
    }

    #[test]
    fn test_other_country_featured_scope() {
        let cigars = sample();
        let catalog = CountryCatalog::new(OtherCountryScope::Featured);
        let other = ActiveFilter::Country(CountryFilter::parse("other"));
        // Peru and the record without a country
        assert_eq!(ids(&apply(&cigars, &other, &catalog)), vec!["c3", "c4"]);
    }

    #[test]
    fn test_other_country_catalog_scope() {
        let cigars = sample();
        let catalog = CountryCatalog::new(OtherCountryScope::Catalog);
        let other = ActiveFilter::Country(CountryFilter::Other);
        assert_eq!(ids(&apply(&cigars, &other, &catalog)), vec!["c4"]);
    }

    #[test]
    fn test_named_country_never_matches_missing() {
        let cigars = sample();
        let catalog = CountryCatalog::default();
        let filter = ActiveFilter::Country(CountryFilter::parse("Nicaragua"));
        assert_eq!(ids(&apply(&cigars, &filter, &catalog)), vec!["c0", "c1"]);
    }

    #[test]
    fn test_clear_local_filter_resets() {
        let mut state = FilterState::local(ActiveFilter::wrapper("Maduro"));
        assert_eq!(state.clear(), ClearOutcome::Reset);
        assert_eq!(state.filter(), &ActiveFilter::None);
    }

    #[test]
    fn test_clear_navigation_filter_navigates_back() {
        let mut state = FilterState::from_navigation(
            ActiveFilter::Country(CountryFilter::Other),
            Screen::Dashboard,
        );
        assert_eq!(state.clear(), ClearOutcome::NavigateBack(Screen::Dashboard));
        assert_eq!(state.origin(), &FilterOrigin::Local);
        assert_eq!(state.clear(), ClearOutcome::Reset);
    }

    #[test]
    fn test_select_replaces_filter_and_becomes_local() {
        let mut state = FilterState::from_navigation(ActiveFilter::search("padron"), Screen::Dashboard);
        state.select(ActiveFilter::Strength(StrengthFilter::Flavored));
        assert_eq!(state.filter().kind(), "strength");
        assert_eq!(state.clear(), ClearOutcome::Reset);
    }

    #[test]
    fn test_serialize_filter() {
        let filter = ActiveFilter::Strength(StrengthFilter::Flavored);
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            serde_json::json!({"kind": "strength", "value": "Flavored"})
        );
        assert_eq!(
            serde_json::to_value(ActiveFilter::None).unwrap(),
            serde_json::json!({"kind": "none"})
        );
    }
}
