use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The three record collections kept per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollectionKind {
    Cigars,
    Humidors,
    JournalEntries,
}

impl CollectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::Cigars => "cigars",
            CollectionKind::Humidors => "humidors",
            CollectionKind::JournalEntries => "journalEntries",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cigars" => Ok(CollectionKind::Cigars),
            "humidors" => Ok(CollectionKind::Humidors),
            "journalEntries" => Ok(CollectionKind::JournalEntries),
            other => Err(Error::InvalidDocumentPath(format!(
                "unknown collection '{}'",
                other
            ))),
        }
    }
}

/// Owner of a set of collections: one user within one app deployment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserScope {
    pub app_id: String,
    pub user_id: String,
}

impl UserScope {
    pub fn new(app_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            user_id: user_id.into(),
        }
    }

    /// `artifacts/{app}/users/{user}/{collection}`
    pub fn collection_path(&self, collection: CollectionKind) -> String {
        format!(
            "artifacts/{}/users/{}/{}",
            self.app_id, self.user_id, collection
        )
    }

    pub fn document(&self, collection: CollectionKind, doc_id: impl Into<String>) -> DocumentPath {
        DocumentPath {
            scope: self.clone(),
            collection,
            doc_id: doc_id.into(),
        }
    }
}

/// Location of one record: `artifacts/{appId}/users/{userId}/{collection}/{docId}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentPath {
    pub scope: UserScope,
    pub collection: CollectionKind,
    pub doc_id: String,
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            self.scope.collection_path(self.collection),
            self.doc_id
        )
    }
}

impl FromStr for DocumentPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.trim_matches('/').split('/').collect();

        let [root, app_id, users, user_id, collection, doc_id] = segments.as_slice() else {
            return Err(Error::InvalidDocumentPath(format!(
                "expected 6 segments, found {}: {}",
                segments.len(),
                s
            )));
        };

        if *root != "artifacts" || *users != "users" {
            return Err(Error::InvalidDocumentPath(s.to_string()));
        }

        if [app_id, user_id, doc_id].iter().any(|seg| seg.is_empty()) {
            return Err(Error::InvalidDocumentPath(format!("empty segment in {}", s)));
        }

        Ok(DocumentPath {
            scope: UserScope::new(*app_id, *user_id),
            collection: collection.parse()?,
            doc_id: doc_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_path_format() {
        let scope = UserScope::new("humidor-hub", "u42");
        let path = scope.document(CollectionKind::JournalEntries, "j1");
        assert_eq!(
            path.to_string(),
            "artifacts/humidor-hub/users/u42/journalEntries/j1"
        );
    }

    #[test]
    fn test_document_path_parse() {
        let path: DocumentPath = "artifacts/app/users/u1/cigars/c9".parse().unwrap();
        assert_eq!(path.scope, UserScope::new("app", "u1"));
        assert_eq!(path.collection, CollectionKind::Cigars);
        assert_eq!(path.doc_id, "c9");
    }

    #[test]
    fn test_document_path_rejects_bad_layouts() {
        assert!("artifacts/app/users/u1/cigars".parse::<DocumentPath>().is_err());
        assert!("stuff/app/users/u1/cigars/c1".parse::<DocumentPath>().is_err());
        assert!("artifacts/app/users/u1/boxes/c1".parse::<DocumentPath>().is_err());
        assert!("artifacts//users/u1/cigars/c1".parse::<DocumentPath>().is_err());
    }
}
