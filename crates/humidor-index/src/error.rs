use std::fmt;

/// Result type for humidor-index operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the store layer
#[derive(Debug)]
pub enum Error {
    /// Database operation failed
    Database(rusqlite::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Query-specific error (invalid input, ambiguous id, refused delete)
    Query(String),

    /// Column holding JSON could not be encoded or decoded
    Serialization(serde_json::Error),
}

impl Error {
    /// The store's tables do not match what this build expects, usually a
    /// file written by another version. Reopening rebuilds it.
    pub fn is_schema_mismatch(&self) -> bool {
        match self {
            Error::Database(err) => {
                let msg = err.to_string();
                msg.contains("no such column") || msg.contains("no such table")
            }
            _ => false,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Database(err) if self.is_schema_mismatch() => write!(
                f,
                "Database schema mismatch: {}. Run the command again to rebuild the store.",
                err
            ),
            Error::Database(err) => write!(f, "Database error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Query(msg) => write!(f, "Query error: {}", msg),
            Error::Serialization(err) => write!(f, "Serialization error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Database(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Query(_) => None,
            Error::Serialization(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_database_error_message() {
        let sqlite_err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some("UNIQUE constraint failed".to_string()),
        );
        let err = Error::Database(sqlite_err);
        let msg = err.to_string();

        assert!(msg.starts_with("Database error:"));
        assert!(!err.is_schema_mismatch());
    }

    #[test]
    fn test_bad_flavor_notes_are_a_serialization_error() {
        let err: Error = serde_json::from_str::<Vec<String>>("cedar, cocoa").unwrap_err().into();
        assert!(err.to_string().starts_with("Serialization error:"));
        assert!(!err.is_schema_mismatch());
    }

    #[test]
    fn test_query_error_has_no_source() {
        use std::error::Error as _;
        let err = Error::Query("humidor h1 still holds 3 cigars".to_string());
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "Query error: humidor h1 still holds 3 cigars");
    }
}
