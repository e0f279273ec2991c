use crate::{Error, Result};
use chrono::{DateTime, Utc};
use humidor_engine::{JournalSummary, search_journal, summarize_journal};
use humidor_index::Database;
use humidor_types::{EntryId, JournalEntry, Rating, non_empty};
use std::sync::Arc;

/// A smoking session to record. Ratings are on the 0-5 scale in half steps;
/// an absent rating stays unrated.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub cigar: String,
    pub date_smoked: Option<DateTime<Utc>>,
    pub experience_rating: Option<f64>,
    pub draw_rating: Option<f64>,
    pub burn_rating: Option<f64>,
    pub ash_rating: Option<f64>,
    pub notes: Option<String>,
    pub first_third_notes: Option<String>,
    pub second_third_notes: Option<String>,
    pub final_third_notes: Option<String>,
    pub location: Option<String>,
    pub pairing: Option<String>,
    pub burn_time_minutes: Option<u32>,
    /// Take one cigar out of stock.
    pub from_stock: bool,
}

pub struct JournalOps {
    db: Arc<Database>,
}

impl JournalOps {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn add(&self, new: NewEntry) -> Result<JournalEntry> {
        let id = self
            .db
            .find_cigar_by_prefix(&new.cigar)?
            .ok_or_else(|| Error::NotFound(format!("cigar '{}'", new.cigar)))?;
        let cigar = self
            .db
            .get_cigar(&id)?
            .ok_or_else(|| Error::NotFound(format!("cigar '{}'", new.cigar)))?;

        let rating = |value: Option<f64>| value.map(Rating::new).transpose();
        let text = |value: Option<String>| value.as_deref().and_then(non_empty);

        let mut entry = JournalEntry::new(
            EntryId::generate(),
            cigar.id.clone(),
            new.date_smoked.unwrap_or_else(Utc::now),
        );
        entry.cigar_brand = cigar.brand.clone();
        entry.cigar_name = cigar.name.clone();
        entry.experience_rating = rating(new.experience_rating)?.unwrap_or_default();
        entry.draw_rating = rating(new.draw_rating)?.unwrap_or_default();
        entry.burn_rating = rating(new.burn_rating)?.unwrap_or_default();
        entry.ash_rating = rating(new.ash_rating)?.unwrap_or_default();
        entry.notes = text(new.notes);
        entry.first_third_notes = text(new.first_third_notes);
        entry.second_third_notes = text(new.second_third_notes);
        entry.final_third_notes = text(new.final_third_notes);
        entry.location = text(new.location);
        entry.pairing = text(new.pairing);
        entry.burn_time_minutes = new.burn_time_minutes.filter(|minutes| *minutes > 0);

        if new.from_stock && cigar.quantity == 0 {
            return Err(Error::InvalidOperation(format!(
                "{} is out of stock",
                cigar.display_name()
            )));
        }

        self.db.insert_or_update_entry(&entry)?;
        if new.from_stock {
            self.db.adjust_quantity(&cigar.id, -1)?;
        }

        tracing::info!(entry = %entry.id, cigar = %cigar.id, "journal entry added");
        Ok(entry)
    }

    /// Newest first. A search runs before the limit is applied.
    pub fn list(&self, limit: Option<usize>, search: Option<&str>) -> Result<Vec<JournalEntry>> {
        let Some(query) = search.filter(|q| !q.trim().is_empty()) else {
            return Ok(self.db.list_entries(limit)?);
        };

        let entries = self.db.list_entries(None)?;
        let cigars = self.db.list_cigars()?;
        let mut matched: Vec<JournalEntry> = search_journal(&entries, &cigars, query)
            .into_iter()
            .cloned()
            .collect();
        if let Some(limit) = limit {
            matched.truncate(limit);
        }
        Ok(matched)
    }

    pub fn show(&self, key: &str) -> Result<JournalEntry> {
        let id = self
            .db
            .find_entry_by_prefix(key)?
            .ok_or_else(|| Error::NotFound(format!("journal entry '{}'", key)))?;
        self.db
            .get_entry(&id)?
            .ok_or_else(|| Error::NotFound(format!("journal entry '{}'", key)))
    }

    pub fn remove(&self, key: &str) -> Result<JournalEntry> {
        let entry = self.show(key)?;
        self.db.delete_entry(&entry.id)?;
        tracing::info!(entry = %entry.id, "journal entry removed");
        Ok(entry)
    }

    pub fn summary(&self) -> Result<JournalSummary> {
        let entries = self.db.list_entries(None)?;
        Ok(summarize_journal(&entries))
    }
}
