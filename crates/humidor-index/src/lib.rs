// SQLite collection store
// One row per document, every row scoped by (app_id, user_id)

mod db;
pub mod error;
mod queries;
mod records;
mod schema;

// Public API
pub use db::Database;
pub use error::{Error, Result};
pub use records::{ImportCounts, StoreStats};
pub use schema::SCHEMA_VERSION;
