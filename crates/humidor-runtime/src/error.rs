use std::fmt;

/// Result type for humidor-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Store layer error
    Index(humidor_index::Error),

    /// Record validation error (ratings, strengths, document paths)
    Types(humidor_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// No record matches the given id or prefix
    NotFound(String),

    /// Invalid operation or state
    InvalidOperation(String),

    /// Import or export document could not be read or written
    Export(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Index(err) => write!(f, "Store error: {}", err),
            Error::Types(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::NotFound(what) => write!(f, "Not found: {}", what),
            Error::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
            Error::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Index(err) => Some(err),
            Error::Types(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_)
            | Error::NotFound(_)
            | Error::InvalidOperation(_)
            | Error::Export(_) => None,
        }
    }
}

impl From<humidor_index::Error> for Error {
    fn from(err: humidor_index::Error) -> Self {
        Error::Index(err)
    }
}

impl From<humidor_types::Error> for Error {
    fn from(err: humidor_types::Error) -> Self {
        Error::Types(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Export(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Export(err.to_string())
    }
}
