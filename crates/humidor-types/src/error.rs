use std::fmt;

/// Result type for humidor-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Rating outside 0..=5 or not on a half step
    InvalidRating(String),

    /// Strength label that is not one of the five known levels
    InvalidStrength(String),

    /// Document path that does not follow the artifacts/users layout
    InvalidDocumentPath(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRating(msg) => write!(f, "Invalid rating: {}", msg),
            Error::InvalidStrength(value) => write!(
                f,
                "Invalid strength '{}': expected Mild, Mild-Medium, Medium, Medium-Full or Full",
                value
            ),
            Error::InvalidDocumentPath(path) => write!(f, "Invalid document path: {}", path),
        }
    }
}

impl std::error::Error for Error {}
