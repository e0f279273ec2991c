use rusqlite::Connection;

use crate::Result;

// Schema version (increment when changing table definitions)
pub const SCHEMA_VERSION: i32 = 3;

// Every table is keyed by (app_id, user_id, id), mirroring the
// artifacts/{app}/users/{user}/{collection}/{doc} document layout.
// List queries order by rowid so records come back in insertion order;
// upserts keep the rowid of the row they update.

pub fn init_schema(conn: &Connection) -> Result<()> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version != SCHEMA_VERSION {
        if current_version != 0 {
            tracing::warn!(
                from = current_version,
                to = SCHEMA_VERSION,
                "schema version changed, rebuilding store"
            );
        }
        drop_all_tables(conn)?;
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS humidors (
            app_id TEXT NOT NULL,
            user_id TEXT NOT NULL,
            id TEXT NOT NULL,
            name TEXT NOT NULL,
            size TEXT,
            temp REAL,
            humidity REAL,
            sensor_device_id TEXT,
            PRIMARY KEY (app_id, user_id, id)
        );

        CREATE TABLE IF NOT EXISTS cigars (
            app_id TEXT NOT NULL,
            user_id TEXT NOT NULL,
            id TEXT NOT NULL,
            humidor_id TEXT NOT NULL,
            brand TEXT,
            name TEXT,
            shape TEXT,
            size TEXT,
            wrapper TEXT,
            binder TEXT,
            filler TEXT,
            country TEXT,
            strength TEXT,
            flavor_notes TEXT NOT NULL DEFAULT '[]',
            quantity INTEGER NOT NULL DEFAULT 0,
            price REAL NOT NULL DEFAULT 0,
            is_puro BOOLEAN NOT NULL DEFAULT 0,
            PRIMARY KEY (app_id, user_id, id)
        );

        CREATE TABLE IF NOT EXISTS journal_entries (
            app_id TEXT NOT NULL,
            user_id TEXT NOT NULL,
            id TEXT NOT NULL,
            cigar_id TEXT NOT NULL,
            cigar_brand TEXT,
            cigar_name TEXT,
            date_smoked TEXT NOT NULL,
            experience_rating REAL NOT NULL DEFAULT 0,
            draw_rating REAL NOT NULL DEFAULT 0,
            burn_rating REAL NOT NULL DEFAULT 0,
            ash_rating REAL NOT NULL DEFAULT 0,
            notes TEXT,
            first_third_notes TEXT,
            second_third_notes TEXT,
            final_third_notes TEXT,
            location TEXT,
            pairing TEXT,
            burn_time_minutes INTEGER,
            PRIMARY KEY (app_id, user_id, id)
        );

        CREATE INDEX IF NOT EXISTS idx_cigars_humidor ON cigars(app_id, user_id, humidor_id);
        CREATE INDEX IF NOT EXISTS idx_journal_date ON journal_entries(app_id, user_id, date_smoked DESC);
        CREATE INDEX IF NOT EXISTS idx_journal_cigar ON journal_entries(app_id, user_id, cigar_id);
        "#,
    )?;

    conn.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;

    Ok(())
}

fn drop_all_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        DROP TABLE IF EXISTS journal_entries;
        DROP TABLE IF EXISTS cigars;
        DROP TABLE IF EXISTS humidors;
        "#,
    )?;
    Ok(())
}
