// Engine module - pure functions over in-memory collections
// Input is always a borrowed slice of records; output is a freshly built Vec.
// Nothing here touches storage or prints.

pub mod aggregate;
pub mod catalog;
pub mod collection;
pub mod dashboard;
pub mod draft;
pub mod filter;
pub mod journal;
pub mod navigation;
pub mod puro;

pub use aggregate::{Bucket, alphabetical, group_quantities, strength_breakdown, top_n, total_quantity};
pub use catalog::{CountryCatalog, CountryCategory, OtherCountryScope, FEATURED_COUNTRIES, OTHER_COUNTRIES_LABEL};
pub use collection::{Collection, PanelCache};
pub use dashboard::{
    CollectionSummary, DashboardSettings, HumidorFill, Panel, PanelContent, PanelOrdering,
    PanelView,
};
pub use draft::{CigarDraft, PuroNotice};
pub use filter::{ActiveFilter, ClearOutcome, CountryFilter, FilterOrigin, FilterState, StrengthFilter};
pub use journal::{JournalSummary, search_journal, summarize_journal};
pub use navigation::{NavigationRequest, Screen};
pub use puro::{OriginMatch, PuroVerdict, classify_origin, detect_puro, detect_puro_for};

use humidor_types::{Cigar, Humidor, JournalEntry};

// Façade API - stable entry points for the runtime and CLI layers

/// Filter a cigar list with the active filter (records borrowed, order kept).
pub fn filter_cigars<'a>(
    cigars: &'a [Cigar],
    filter: &ActiveFilter,
    catalog: &CountryCatalog,
) -> Vec<&'a Cigar> {
    filter::apply(cigars, filter, catalog)
}

/// Build one dashboard panel from the full collection.
pub fn build_panel(
    panel: Panel,
    cigars: &[Cigar],
    humidors: &[Humidor],
    entries: &[JournalEntry],
    settings: &DashboardSettings,
    catalog: &CountryCatalog,
) -> PanelView {
    dashboard::build(panel, cigars, humidors, entries, settings, catalog)
}
