pub mod cigar;
pub mod humidor;
pub mod journal;

use humidor_types::UserScope;
use rusqlite::{Connection, types::Type};

use crate::{Error, Result};

/// Tables that hold user documents.
#[derive(Debug, Clone, Copy)]
pub enum Table {
    Humidors,
    Cigars,
    JournalEntries,
}

impl Table {
    fn name(&self) -> &'static str {
        match self {
            Table::Humidors => "humidors",
            Table::Cigars => "cigars",
            Table::JournalEntries => "journal_entries",
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            Table::Humidors => "humidor",
            Table::Cigars => "cigar",
            Table::JournalEntries => "journal entry",
        }
    }
}

/// Resolve a full id from an id prefix (supports short ids like "7f2abd2d").
pub fn find_by_prefix(
    conn: &Connection,
    scope: &UserScope,
    table: Table,
    prefix: &str,
) -> Result<Option<String>> {
    let mut stmt = conn.prepare(&format!(
        r#"
        SELECT id
        FROM {}
        WHERE app_id = ?1 AND user_id = ?2 AND id LIKE ?3 ESCAPE '\'
        ORDER BY id
        LIMIT 2
        "#,
        table.name()
    ))?;

    let pattern = format!("{}%", escape_like(prefix));
    let mut matches: Vec<String> = stmt
        .query_map([&scope.app_id, &scope.user_id, &pattern], |row| row.get(0))?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    // An exact id always wins over longer ids that share it as a prefix
    if matches.iter().any(|id| id == prefix) {
        return Ok(Some(prefix.to_string()));
    }

    match matches.len() {
        0 => Ok(None),
        1 => Ok(Some(matches.remove(0))),
        _ => Err(Error::Query(format!(
            "Ambiguous {} ID prefix '{}': multiple records match",
            table.noun(),
            prefix
        ))),
    }
}

pub fn count(conn: &Connection, scope: &UserScope, table: Table) -> Result<usize> {
    let count: i64 = conn.query_row(
        &format!(
            "SELECT COUNT(*) FROM {} WHERE app_id = ?1 AND user_id = ?2",
            table.name()
        ),
        [&scope.app_id, &scope.user_id],
        |row| row.get(0),
    )?;

    Ok(count as usize)
}

fn escape_like(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Wrap a decode failure so it surfaces as a rusqlite conversion error.
pub(crate) fn conversion_error<E>(column: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err))
}

/// Stored counts are never negative; clamp anything odd into range.
pub(crate) fn count_from_sql(raw: i64) -> u32 {
    u32::try_from(raw.max(0)).unwrap_or(u32::MAX)
}
