use chrono::{DateTime, SecondsFormat, Utc};
use humidor_types::{CigarId, EntryId, JournalEntry, Rating, UserScope};
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::{conversion_error, count_from_sql};
use crate::Result;

const COLUMNS: &str = "id, cigar_id, cigar_brand, cigar_name, date_smoked, \
                       experience_rating, draw_rating, burn_rating, ash_rating, \
                       notes, first_third_notes, second_third_notes, final_third_notes, \
                       location, pairing, burn_time_minutes";

pub fn insert_or_update(conn: &Connection, scope: &UserScope, entry: &JournalEntry) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO journal_entries (app_id, user_id, id, cigar_id, cigar_brand, cigar_name,
                                     date_smoked, experience_rating, draw_rating, burn_rating,
                                     ash_rating, notes, first_third_notes, second_third_notes,
                                     final_third_notes, location, pairing, burn_time_minutes)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)
        ON CONFLICT(app_id, user_id, id) DO UPDATE SET
            cigar_id = ?4,
            cigar_brand = ?5,
            cigar_name = ?6,
            date_smoked = ?7,
            experience_rating = ?8,
            draw_rating = ?9,
            burn_rating = ?10,
            ash_rating = ?11,
            notes = ?12,
            first_third_notes = ?13,
            second_third_notes = ?14,
            final_third_notes = ?15,
            location = ?16,
            pairing = ?17,
            burn_time_minutes = ?18
        "#,
        params![
            &scope.app_id,
            &scope.user_id,
            entry.id.as_str(),
            entry.cigar_id.as_str(),
            &entry.cigar_brand,
            &entry.cigar_name,
            format_timestamp(&entry.date_smoked),
            entry.experience_rating.value(),
            entry.draw_rating.value(),
            entry.burn_rating.value(),
            entry.ash_rating.value(),
            &entry.notes,
            &entry.first_third_notes,
            &entry.second_third_notes,
            &entry.final_third_notes,
            &entry.location,
            &entry.pairing,
            entry.burn_time_minutes.map(i64::from)
        ],
    )?;

    Ok(())
}

pub fn get(conn: &Connection, scope: &UserScope, id: &EntryId) -> Result<Option<JournalEntry>> {
    let result = conn
        .query_row(
            &format!(
                "SELECT {} FROM journal_entries WHERE app_id = ?1 AND user_id = ?2 AND id = ?3",
                COLUMNS
            ),
            params![&scope.app_id, &scope.user_id, id.as_str()],
            from_row,
        )
        .optional()?;

    Ok(result)
}

/// Newest smoke first; entries logged at the same instant keep the most
/// recently written one on top.
pub fn list(conn: &Connection, scope: &UserScope, limit: Option<usize>) -> Result<Vec<JournalEntry>> {
    let mut stmt = conn.prepare(&format!(
        r#"
        SELECT {}
        FROM journal_entries
        WHERE app_id = ?1 AND user_id = ?2
        ORDER BY date_smoked DESC, rowid DESC
        LIMIT ?3
        "#,
        COLUMNS
    ))?;

    let limit = limit.map(|n| n as i64).unwrap_or(-1);
    let entries = stmt
        .query_map(params![&scope.app_id, &scope.user_id, limit], from_row)?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(entries)
}

pub fn list_for_cigar(conn: &Connection, scope: &UserScope, cigar_id: &CigarId) -> Result<Vec<JournalEntry>> {
    let mut stmt = conn.prepare(&format!(
        r#"
        SELECT {}
        FROM journal_entries
        WHERE app_id = ?1 AND user_id = ?2 AND cigar_id = ?3
        ORDER BY date_smoked DESC, rowid DESC
        "#,
        COLUMNS
    ))?;

    let entries = stmt
        .query_map(
            params![&scope.app_id, &scope.user_id, cigar_id.as_str()],
            from_row,
        )?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(entries)
}

pub fn delete(conn: &Connection, scope: &UserScope, id: &EntryId) -> Result<bool> {
    let removed = conn.execute(
        "DELETE FROM journal_entries WHERE app_id = ?1 AND user_id = ?2 AND id = ?3",
        params![&scope.app_id, &scope.user_id, id.as_str()],
    )?;

    Ok(removed > 0)
}

// Fixed-width UTC timestamps so text ordering matches time ordering
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn rating_at(row: &Row<'_>, column: usize) -> rusqlite::Result<Rating> {
    let value: f64 = row.get(column)?;
    Rating::new(value).map_err(|e| conversion_error(column, e))
}

fn from_row(row: &Row<'_>) -> rusqlite::Result<JournalEntry> {
    let date_smoked: String = row.get(4)?;
    let date_smoked = DateTime::parse_from_rfc3339(&date_smoked)
        .map_err(|e| conversion_error(4, e))?
        .with_timezone(&Utc);

    Ok(JournalEntry {
        id: EntryId::new(row.get::<_, String>(0)?),
        cigar_id: CigarId::new(row.get::<_, String>(1)?),
        cigar_brand: row.get(2)?,
        cigar_name: row.get(3)?,
        date_smoked,
        experience_rating: rating_at(row, 5)?,
        draw_rating: rating_at(row, 6)?,
        burn_rating: rating_at(row, 7)?,
        ash_rating: rating_at(row, 8)?,
        notes: row.get(9)?,
        first_third_notes: row.get(10)?,
        second_third_notes: row.get(11)?,
        final_third_notes: row.get(12)?,
        location: row.get(13)?,
        pairing: row.get(14)?,
        burn_time_minutes: row
            .get::<_, Option<i64>>(15)?
            .map(count_from_sql)
            .filter(|minutes| *minutes > 0),
    })
}
