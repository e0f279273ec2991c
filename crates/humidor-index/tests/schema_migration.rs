//! Integration tests for schema migration
//!
//! These tests verify that Database::open handles schema version mismatches
//! by dropping and recreating tables.

use humidor_index::{Database, SCHEMA_VERSION};
use humidor_types::{Cigar, CigarId, HumidorId, UserScope};
use rusqlite::Connection;
use std::path::Path;
use tempfile::TempDir;

fn scope() -> UserScope {
    UserScope::new("humidor-hub", "local")
}

/// Create a database with an old schema (version 2) that lacks the scope columns
fn create_old_schema_db(path: &Path) {
    let conn = Connection::open(path).unwrap();

    conn.execute_batch(
        r#"
        CREATE TABLE humidors (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            size TEXT
        );

        CREATE TABLE cigars (
            id TEXT PRIMARY KEY,
            humidor_id TEXT NOT NULL,
            brand TEXT,
            quantity INTEGER
        );

        PRAGMA user_version = 2;
        "#,
    )
    .unwrap();

    conn.execute(
        "INSERT INTO cigars (id, humidor_id, brand, quantity) VALUES ('old', 'h1', 'Padron', 3)",
        [],
    )
    .unwrap();
}

fn user_version(path: &Path) -> i32 {
    let conn = Connection::open(path).unwrap();
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn test_auto_migration_from_old_schema() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("humidor.db");

    create_old_schema_db(&db_path);
    assert_eq!(user_version(&db_path), 2, "Should start with schema version 2");

    let db = Database::open(&db_path, scope()).expect("Database::open should rebuild the schema");
    assert_eq!(user_version(&db_path), SCHEMA_VERSION);

    // New columns work
    let mut cigar = Cigar::new(CigarId::new("c1"), HumidorId::new("h1"));
    cigar.wrapper = Some("Habano".to_string());
    cigar.flavor_notes = vec!["Cedar".to_string()];
    db.insert_or_update_cigar(&cigar).unwrap();
    assert_eq!(db.get_cigar(&CigarId::new("c1")).unwrap(), Some(cigar));
}

#[test]
fn test_old_data_is_cleared_on_migration() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("humidor.db");

    create_old_schema_db(&db_path);
    let db = Database::open(&db_path, scope()).unwrap();

    assert!(
        db.list_cigars().unwrap().is_empty(),
        "Old cigars should be cleared after migration"
    );
}

#[test]
fn test_current_version_preserves_data() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("humidor.db");

    let db = Database::open(&db_path, scope()).unwrap();
    db.insert_or_update_cigar(&Cigar::new(CigarId::new("keep"), HumidorId::new("h1")))
        .unwrap();
    drop(db);

    // Reopen - no migration needed
    let db = Database::open(&db_path, scope()).unwrap();
    let cigars = db.list_cigars().unwrap();
    assert_eq!(cigars.len(), 1);
    assert_eq!(cigars[0].id.as_str(), "keep");
}
