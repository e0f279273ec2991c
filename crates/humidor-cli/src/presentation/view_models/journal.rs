use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct JournalRowViewModel {
    pub id: String,
    pub id_short: String,
    pub cigar_id: String,
    pub title: String,
    pub date_smoked: DateTime<Utc>,
    /// 0 when unrated.
    pub experience_rating: f64,
    pub location: Option<String>,
    pub pairing: Option<String>,
    pub burn_time_minutes: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct JournalListViewModel {
    pub search: Option<String>,
    pub entries: Vec<JournalRowViewModel>,
}

#[derive(Debug, Serialize)]
pub struct JournalDetailViewModel {
    pub entry: JournalRowViewModel,
    pub draw_rating: f64,
    pub burn_rating: f64,
    pub ash_rating: f64,
    pub notes: Option<String>,
    pub first_third_notes: Option<String>,
    pub second_third_notes: Option<String>,
    pub final_third_notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JournalSavedViewModel {
    pub entry: JournalRowViewModel,
    pub from_stock: bool,
}

#[derive(Debug, Serialize)]
pub struct JournalRemovedViewModel {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct JournalSummaryViewModel {
    pub entries: usize,
    pub average_experience: Option<f64>,
    pub favourite: Option<JournalRowViewModel>,
    pub last_smoked: Option<DateTime<Utc>>,
    pub total_burn_minutes: u64,
}
