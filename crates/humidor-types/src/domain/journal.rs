use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CigarId, EntryId, Rating, lenient_minutes, lenient_text};

/// One smoking session, written up after the fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: EntryId,
    pub cigar_id: CigarId,

    /// Snapshot of the cigar's brand at the time of writing; survives deletion
    /// of the cigar record.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub cigar_brand: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub cigar_name: Option<String>,

    #[serde(default = "Utc::now")]
    pub date_smoked: DateTime<Utc>,

    #[serde(default)]
    pub experience_rating: Rating,
    #[serde(default)]
    pub draw_rating: Rating,
    #[serde(default)]
    pub burn_rating: Rating,
    #[serde(default)]
    pub ash_rating: Rating,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub first_third_notes: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub second_third_notes: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub final_third_notes: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub pairing: Option<String>,
    #[serde(default, deserialize_with = "lenient_minutes", skip_serializing_if = "Option::is_none")]
    pub burn_time_minutes: Option<u32>,
}

impl JournalEntry {
    pub fn new(id: EntryId, cigar_id: CigarId, date_smoked: DateTime<Utc>) -> Self {
        Self {
            id,
            cigar_id,
            cigar_brand: None,
            cigar_name: None,
            date_smoked,
            experience_rating: Rating::default(),
            draw_rating: Rating::default(),
            burn_rating: Rating::default(),
            ash_rating: Rating::default(),
            notes: None,
            first_third_notes: None,
            second_third_notes: None,
            final_third_notes: None,
            location: None,
            pairing: None,
            burn_time_minutes: None,
        }
    }

    /// Free-text fields searched by the journal screen, in display order.
    pub fn text_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.notes.as_deref(),
            self.first_third_notes.as_deref(),
            self.second_third_notes.as_deref(),
            self.final_third_notes.as_deref(),
        ]
        .into_iter()
        .flatten()
    }

    /// Heading for list output: the cigar snapshot or a placeholder.
    pub fn title(&self) -> String {
        match (self.cigar_brand.as_deref(), self.cigar_name.as_deref()) {
            (Some(brand), Some(name)) => format!("{} {}", brand, name),
            (Some(only), None) | (None, Some(only)) => only.to_string(),
            (None, None) => format!("Cigar {}", self.cigar_id.short()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_entry() {
        let json = r#"{
            "id": "j1",
            "cigarId": "c1",
            "cigarBrand": "Padron",
            "dateSmoked": "2025-06-01T20:30:00Z",
            "experienceRating": 4.5,
            "drawRating": 4,
            "firstThirdNotes": "Cedar and pepper",
            "finalThirdNotes": "",
            "burnTimeMinutes": "75"
        }"#;

        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.experience_rating.value(), 4.5);
        assert_eq!(entry.draw_rating.value(), 4.0);
        assert!(entry.burn_rating.is_unrated());
        assert_eq!(entry.final_third_notes, None);
        assert_eq!(entry.burn_time_minutes, Some(75));
        assert_eq!(
            entry.date_smoked,
            Utc.with_ymd_and_hms(2025, 6, 1, 20, 30, 0).unwrap()
        );
        assert_eq!(entry.title(), "Padron");
    }

    #[test]
    fn test_text_fields_skip_absent_notes() {
        let mut entry = JournalEntry::new(EntryId::new("j1"), CigarId::new("c1"), Utc::now());
        entry.second_third_notes = Some("Leather".to_string());
        entry.notes = Some("Great with coffee".to_string());

        let fields: Vec<&str> = entry.text_fields().collect();
        assert_eq!(fields, vec!["Great with coffee", "Leather"]);
    }
}
