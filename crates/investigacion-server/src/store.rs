//! Download store
//!
//! Process-lifetime mapping from a generated file's public name to its
//! absolute path. Entries are added on generation and purged lazily when
//! the underlying file disappears from disk. No TTL, no persistence.

use std::collections::HashMap;
use std::path::PathBuf;

use parking_lot::RwLock;
use thiserror::Error;

/// Failure modes when resolving a download
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The file name was never recorded
    #[error("unknown file name: {0}")]
    NotFound(String),

    /// The file name was recorded but its file is gone from disk; the
    /// entry has been purged
    #[error("file no longer on disk: {0}")]
    Gone(String),
}

/// In-memory file map shared by the request handlers
#[derive(Debug, Default)]
pub struct DownloadStore {
    entries: RwLock<HashMap<String, PathBuf>>,
}

impl DownloadStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generated file, overwriting any entry with the same name
    pub fn record(&self, file_name: impl Into<String>, path: impl Into<PathBuf>) {
        self.entries.write().insert(file_name.into(), path.into());
    }

    /// Resolve a file name to its path
    ///
    /// `NotFound` if the name was never recorded. If it was recorded but
    /// the file no longer exists, the entry is removed and `Gone` is
    /// returned, so a later resolve of the same name sees `NotFound`.
    /// The existence check races with external deleters; accepted.
    pub fn resolve(&self, file_name: &str) -> Result<PathBuf, ResolveError> {
        let path = self.entries.read().get(file_name).cloned();

        match path {
            None => Err(ResolveError::NotFound(file_name.to_string())),
            Some(path) if path.exists() => Ok(path),
            Some(_) => {
                self.entries.write().remove(file_name);
                Err(ResolveError::Gone(file_name.to_string()))
            }
        }
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check whether the store has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_record_and_resolve() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.pdf");
        fs::write(&path, b"%PDF-").unwrap();

        let store = DownloadStore::new();
        store.record("a.pdf", &path);

        assert_eq!(store.resolve("a.pdf").unwrap(), path);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_resolve_unknown_name() {
        let store = DownloadStore::new();
        assert_eq!(
            store.resolve("nunca.pdf"),
            Err(ResolveError::NotFound("nunca.pdf".to_string()))
        );
    }

    #[test]
    fn test_resolve_deleted_file_purges_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("b.pdf");
        fs::write(&path, b"%PDF-").unwrap();

        let store = DownloadStore::new();
        store.record("b.pdf", &path);
        fs::remove_file(&path).unwrap();

        assert_eq!(
            store.resolve("b.pdf"),
            Err(ResolveError::Gone("b.pdf".to_string()))
        );
        // Purged: the second resolve no longer knows the name
        assert_eq!(
            store.resolve("b.pdf"),
            Err(ResolveError::NotFound("b.pdf".to_string()))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_record_overwrites_same_name() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.pdf");
        let second = dir.path().join("second.pdf");
        fs::write(&first, b"%PDF-").unwrap();
        fs::write(&second, b"%PDF-").unwrap();

        let store = DownloadStore::new();
        store.record("x.pdf", &first);
        store.record("x.pdf", &second);

        assert_eq!(store.resolve("x.pdf").unwrap(), second);
        assert_eq!(store.len(), 1);
    }
}
