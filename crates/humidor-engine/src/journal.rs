use std::collections::HashMap;

use chrono::{DateTime, Utc};
use humidor_types::{Cigar, CigarId, EntryId, JournalEntry};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct JournalSummary {
    pub entries: usize,
    /// Mean experience rating over entries that were rated at all.
    pub average_experience: Option<f64>,
    pub favourite: Option<EntryId>,
    pub last_smoked: Option<DateTime<Utc>>,
    pub total_burn_minutes: u64,
}

pub fn summarize_journal(entries: &[JournalEntry]) -> JournalSummary {
    let rated: Vec<f64> = entries
        .iter()
        .filter(|e| !e.experience_rating.is_unrated())
        .map(|e| e.experience_rating.value())
        .collect();

    let average_experience = if rated.is_empty() {
        None
    } else {
        Some(rated.iter().sum::<f64>() / rated.len() as f64)
    };

    // Highest rating wins; on a tie the most recent smoke
    let favourite = entries
        .iter()
        .filter(|e| !e.experience_rating.is_unrated())
        .max_by(|a, b| {
            a.experience_rating
                .cmp(&b.experience_rating)
                .then_with(|| a.date_smoked.cmp(&b.date_smoked))
        })
        .map(|e| e.id.clone());

    JournalSummary {
        entries: entries.len(),
        average_experience,
        favourite,
        last_smoked: entries.iter().map(|e| e.date_smoked).max(),
        total_burn_minutes: entries
            .iter()
            .filter_map(|e| e.burn_time_minutes)
            .map(u64::from)
            .sum(),
    }
}

/// Case-insensitive search over journal entries.
///
/// An entry matches when the query is found in the cigar's name or brand
/// (from the live record, falling back to the snapshot on the entry) or in
/// any of its notes.
pub fn search_journal<'a>(
    entries: &'a [JournalEntry],
    cigars: &[Cigar],
    query: &str,
) -> Vec<&'a JournalEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return entries.iter().collect();
    }

    let by_id: HashMap<&CigarId, &Cigar> = cigars.iter().map(|c| (&c.id, c)).collect();

    entries
        .iter()
        .filter(|entry| {
            let cigar = by_id.get(&entry.cigar_id);
            let name = cigar
                .and_then(|c| c.name.as_deref())
                .or(entry.cigar_name.as_deref());
            let brand = cigar
                .and_then(|c| c.brand.as_deref())
                .or(entry.cigar_brand.as_deref());

            [name, brand]
                .into_iter()
                .flatten()
                .chain(entry.text_fields())
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
