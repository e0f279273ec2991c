use chrono::{DateTime, Utc};
use serde::Serialize;

use super::common::SaveAction;
use super::journal::JournalRowViewModel;

/// One line of stock, as listed.
#[derive(Debug, Clone, Serialize)]
pub struct CigarRowViewModel {
    pub id: String,
    pub id_short: String,
    pub humidor_id: String,
    pub brand: Option<String>,
    pub name: Option<String>,
    pub display_name: String,
    pub wrapper: Option<String>,
    pub country: Option<String>,
    pub strength: Option<String>,
    pub quantity: u32,
    pub price: f64,
    pub is_puro: bool,
    pub flavored: bool,
}

/// The filter in effect on a list and where it came from.
#[derive(Debug, Clone, Serialize)]
pub struct FilterViewModel {
    /// `none`, `search`, `wrapper`, `strength` or `country`.
    pub kind: String,
    pub value: Option<String>,
    /// `local` or `navigation`.
    pub origin: String,
    pub return_to: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CigarListViewModel {
    pub filter: FilterViewModel,
    pub humidor: Option<String>,
    pub cigars: Vec<CigarRowViewModel>,
    pub total_quantity: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PuroViewModel {
    pub is_puro: bool,
    /// What detection says, regardless of any manual flag.
    pub detected: bool,
    pub country: Option<String>,
    pub manual_override: bool,
}

#[derive(Debug, Serialize)]
pub struct CigarDetailViewModel {
    pub cigar: CigarRowViewModel,
    pub humidor_name: Option<String>,
    pub shape: Option<String>,
    pub size: Option<String>,
    pub binder: Option<String>,
    pub filler: Option<String>,
    pub flavor_notes: Vec<String>,
    pub stock_value: f64,
    pub puro: PuroViewModel,
    pub last_smoked: Option<DateTime<Utc>>,
    pub entries: Vec<JournalRowViewModel>,
}

#[derive(Debug, Serialize)]
pub struct CigarSavedViewModel {
    pub action: SaveAction,
    pub cigar: CigarRowViewModel,
    pub puro: PuroViewModel,
    /// Country of a puro the save just detected.
    pub puro_notice: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuantityViewModel {
    pub id: String,
    pub display_name: String,
    pub previous: u32,
    pub current: u32,
    pub delta: i64,
}

#[derive(Debug, Serialize)]
pub struct CigarRemovedViewModel {
    pub id: String,
    pub display_name: String,
    pub quantity: u32,
}
