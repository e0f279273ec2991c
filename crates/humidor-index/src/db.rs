use std::path::Path;

use humidor_types::{Cigar, CigarId, EntryId, Humidor, HumidorId, JournalEntry, UserScope};
use rusqlite::Connection;

use crate::queries::{self, Table, cigar, humidor, journal};
use crate::records::{ImportCounts, StoreStats};
use crate::schema;
use crate::{Error, Result};

pub struct Database {
    conn: Connection,
    scope: UserScope,
}

impl Database {
    pub fn open(db_path: &Path, scope: UserScope) -> Result<Self> {
        tracing::debug!(path = %db_path.display(), app_id = %scope.app_id, "opening store");
        let conn = Connection::open(db_path)?;
        schema::init_schema(&conn)?;
        Ok(Self { conn, scope })
    }

    pub fn open_in_memory(scope: UserScope) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::init_schema(&conn)?;
        Ok(Self { conn, scope })
    }

    pub fn scope(&self) -> &UserScope {
        &self.scope
    }

    // Humidors

    pub fn insert_or_update_humidor(&self, record: &Humidor) -> Result<()> {
        humidor::insert_or_update(&self.conn, &self.scope, record)
    }

    pub fn get_humidor(&self, id: &HumidorId) -> Result<Option<Humidor>> {
        humidor::get(&self.conn, &self.scope, id)
    }

    pub fn list_humidors(&self) -> Result<Vec<Humidor>> {
        humidor::list(&self.conn, &self.scope)
    }

    pub fn find_humidor_by_prefix(&self, prefix: &str) -> Result<Option<HumidorId>> {
        Ok(queries::find_by_prefix(&self.conn, &self.scope, Table::Humidors, prefix)?
            .map(HumidorId::new))
    }

    /// Refuses while cigars are still stored in the humidor.
    pub fn delete_humidor(&self, id: &HumidorId) -> Result<bool> {
        let remaining = cigar::count_in_humidor(&self.conn, &self.scope, id)?;
        if remaining > 0 {
            return Err(Error::Query(format!(
                "humidor {} still holds {} cigar record(s)",
                id, remaining
            )));
        }
        humidor::delete(&self.conn, &self.scope, id)
    }

    /// Delete the humidor and every cigar stored in it. Returns the number of
    /// cigar records removed, or None when the humidor did not exist.
    pub fn delete_humidor_cascade(&self, id: &HumidorId) -> Result<Option<usize>> {
        let tx = self.conn.unchecked_transaction()?;
        let removed_cigars = cigar::delete_by_humidor(&tx, &self.scope, id)?;
        let removed = humidor::delete(&tx, &self.scope, id)?;
        tx.commit()?;

        Ok(removed.then_some(removed_cigars))
    }

    // Cigars

    pub fn insert_or_update_cigar(&self, record: &Cigar) -> Result<()> {
        cigar::insert_or_update(&self.conn, &self.scope, record)
    }

    pub fn get_cigar(&self, id: &CigarId) -> Result<Option<Cigar>> {
        cigar::get(&self.conn, &self.scope, id)
    }

    pub fn list_cigars(&self) -> Result<Vec<Cigar>> {
        cigar::list(&self.conn, &self.scope)
    }

    pub fn list_cigars_in(&self, humidor_id: &HumidorId) -> Result<Vec<Cigar>> {
        cigar::list_by_humidor(&self.conn, &self.scope, humidor_id)
    }

    pub fn find_cigar_by_prefix(&self, prefix: &str) -> Result<Option<CigarId>> {
        Ok(queries::find_by_prefix(&self.conn, &self.scope, Table::Cigars, prefix)?
            .map(CigarId::new))
    }

    pub fn adjust_quantity(&self, id: &CigarId, delta: i64) -> Result<Option<u32>> {
        let tx = self.conn.unchecked_transaction()?;
        let quantity = cigar::adjust_quantity(&tx, &self.scope, id, delta)?;
        tx.commit()?;
        Ok(quantity)
    }

    pub fn delete_cigar(&self, id: &CigarId) -> Result<bool> {
        cigar::delete(&self.conn, &self.scope, id)
    }

    // Journal

    pub fn insert_or_update_entry(&self, entry: &JournalEntry) -> Result<()> {
        journal::insert_or_update(&self.conn, &self.scope, entry)
    }

    pub fn get_entry(&self, id: &EntryId) -> Result<Option<JournalEntry>> {
        journal::get(&self.conn, &self.scope, id)
    }

    pub fn list_entries(&self, limit: Option<usize>) -> Result<Vec<JournalEntry>> {
        journal::list(&self.conn, &self.scope, limit)
    }

    pub fn list_entries_for_cigar(&self, cigar_id: &CigarId) -> Result<Vec<JournalEntry>> {
        journal::list_for_cigar(&self.conn, &self.scope, cigar_id)
    }

    pub fn find_entry_by_prefix(&self, prefix: &str) -> Result<Option<EntryId>> {
        Ok(
            queries::find_by_prefix(&self.conn, &self.scope, Table::JournalEntries, prefix)?
                .map(EntryId::new),
        )
    }

    pub fn delete_entry(&self, id: &EntryId) -> Result<bool> {
        journal::delete(&self.conn, &self.scope, id)
    }

    // Whole store

    pub fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats {
            humidors: queries::count(&self.conn, &self.scope, Table::Humidors)?,
            cigars: queries::count(&self.conn, &self.scope, Table::Cigars)?,
            journal_entries: queries::count(&self.conn, &self.scope, Table::JournalEntries)?,
            total_quantity: cigar::total_quantity(&self.conn, &self.scope)?,
        })
    }

    /// Upsert a whole collection in one transaction.
    ///
    /// With `replace`, the scope is emptied inside the same transaction, so a
    /// failed import leaves the previous collection in place.
    pub fn import(
        &self,
        humidors: &[Humidor],
        cigars: &[Cigar],
        entries: &[JournalEntry],
        replace: bool,
    ) -> Result<ImportCounts> {
        let tx = self.conn.unchecked_transaction()?;
        if replace {
            clear_scope(&tx, &self.scope)?;
        }
        for record in humidors {
            humidor::insert_or_update(&tx, &self.scope, record)?;
        }
        for record in cigars {
            cigar::insert_or_update(&tx, &self.scope, record)?;
        }
        for entry in entries {
            journal::insert_or_update(&tx, &self.scope, entry)?;
        }
        tx.commit()?;

        Ok(ImportCounts {
            humidors: humidors.len(),
            cigars: cigars.len(),
            journal_entries: entries.len(),
        })
    }

    pub fn vacuum(&self) -> Result<()> {
        self.conn.execute("VACUUM", [])?;
        tracing::info!("store vacuumed");
        Ok(())
    }
}

/// Remove every document in this scope; other scopes are untouched.
fn clear_scope(conn: &Connection, scope: &UserScope) -> Result<()> {
    for table in ["journal_entries", "cigars", "humidors"] {
        conn.execute(
            &format!("DELETE FROM {} WHERE app_id = ?1 AND user_id = ?2", table),
            [&scope.app_id, &scope.user_id],
        )?;
    }
    Ok(())
}
