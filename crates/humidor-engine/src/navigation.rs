use std::fmt;

use humidor_types::{CigarAttribute, HumidorId};
use serde::Serialize;

use crate::aggregate::UNKNOWN_LABEL;
use crate::catalog::{CountryCatalog, OTHER_COUNTRIES_LABEL};
use crate::dashboard::Panel;
use crate::filter::{ActiveFilter, CountryFilter, FilterState, StrengthFilter};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "screen", content = "id", rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Dashboard,
    Humidors,
    Humidor(HumidorId),
    Browse,
    Journal,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Dashboard => write!(f, "dashboard"),
            Screen::Humidors => write!(f, "humidors"),
            Screen::Humidor(id) => write!(f, "humidor {}", id),
            Screen::Browse => write!(f, "browse"),
            Screen::Journal => write!(f, "journal"),
        }
    }
}

/// A screen change carrying the filter the destination must apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationRequest {
    pub screen: Screen,
    pub from: Screen,
    pub filter: ActiveFilter,
}

impl NavigationRequest {
    /// Translate a click on a dashboard bucket into a browse request.
    ///
    /// The filter selects the records the bucket counts, "Unknown" included.
    /// Returns None for panels without buckets and for labels that cannot
    /// become a filter (a strength row that is not a known level).
    pub fn from_bucket(panel: Panel, label: &str, catalog: &CountryCatalog) -> Option<Self> {
        let unknown = label == UNKNOWN_LABEL;
        let filter = match panel {
            Panel::TopBrands if unknown => ActiveFilter::Missing(CigarAttribute::Brand),
            Panel::Wrappers if unknown => ActiveFilter::Missing(CigarAttribute::Wrapper),
            Panel::TopCountries if unknown => ActiveFilter::Missing(CigarAttribute::Country),
            Panel::TopBrands => ActiveFilter::brand(label),
            Panel::Wrappers => ActiveFilter::wrapper(label),
            Panel::Strengths => ActiveFilter::Strength(label.parse::<StrengthFilter>().ok()?),
            Panel::TopCountries => ActiveFilter::Country(CountryFilter::parse(label)),
            Panel::Countries => ActiveFilter::Country(category_filter(label, catalog)),
            Panel::Summary | Panel::Humidors => return None,
        };

        Some(Self {
            screen: Screen::Browse,
            from: Screen::Dashboard,
            filter,
        })
    }

    /// Filter state for the destination screen.
    pub fn into_filter_state(self) -> FilterState {
        FilterState::from_navigation(self.filter, self.from)
    }
}

fn category_filter(label: &str, catalog: &CountryCatalog) -> CountryFilter {
    if label.eq_ignore_ascii_case(OTHER_COUNTRIES_LABEL) || label.eq_ignore_ascii_case(UNKNOWN_LABEL) {
        return CountryFilter::Other;
    }
    match catalog.category_by_label(label) {
        Some(category) => CountryFilter::Named(category.country.to_string()),
        None => CountryFilter::parse(label),
    }
}
