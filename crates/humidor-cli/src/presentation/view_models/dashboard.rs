use serde::Serialize;

use super::cigar::{CigarRowViewModel, FilterViewModel};
use super::humidor::HumidorRowViewModel;

#[derive(Debug, Serialize)]
pub struct DashboardViewModel {
    pub panels: Vec<PanelViewModel>,
}

#[derive(Debug, Serialize)]
pub struct PanelViewModel {
    pub key: String,
    pub title: String,
    #[serde(flatten)]
    pub body: PanelBodyViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelBodyViewModel {
    Summary { summary: SummaryViewModel },
    Buckets { rows: Vec<BucketRowViewModel> },
    Humidors { humidors: Vec<HumidorRowViewModel> },
}

#[derive(Debug, Serialize)]
pub struct SummaryViewModel {
    pub total_cigars: u64,
    pub distinct_cigars: usize,
    pub estimated_value: f64,
    pub puro_count: usize,
    pub humidor_count: usize,
    pub journal_count: usize,
    pub average_experience: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct BucketRowViewModel {
    pub label: String,
    pub quantity: u64,
    /// Share of the panel's total quantity.
    pub share_percent: f64,
}

/// Cigars reached from a dashboard row.
#[derive(Debug, Serialize)]
pub struct BrowseViewModel {
    pub panel: String,
    pub label: String,
    pub filter: FilterViewModel,
    pub cigars: Vec<CigarRowViewModel>,
    pub total_quantity: u64,
}
