//! File-backed session store
//!
//! The file holds one JSON object of string values. It is read once on open
//! and rewritten in full (temp file + rename) after every change. The
//! in-memory copy only changes once the write has succeeded.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use convoy_core::SessionStore;
use convoy_domain::{ConvoyError, Result};
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::errors::InfraError;

pub struct FileSessionStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileSessionStore {
    /// Open (or lazily create) the session file at `path`.
    ///
    /// # Errors
    /// Returns `ConvoyError::Session` if the file exists but cannot be read or
    /// is not a JSON object of strings.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let contents = fs::read_to_string(&path).map_err(InfraError::from)?;
            if contents.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&contents).map_err(InfraError::from)?
            }
        } else {
            debug!(path = %path.display(), "session file not found, starting empty");
            BTreeMap::new()
        };

        Ok(Self { path, entries: RwLock::new(entries) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(InfraError::from)?;
        }

        let contents = serde_json::to_string_pretty(entries).map_err(InfraError::from)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, contents).map_err(InfraError::from)?;

        if let Err(err) = fs::rename(&tmp, &self.path) {
            warn!(error = %err, path = %self.path.display(), "session.rename_failed");
            let _ = fs::remove_file(&tmp);
            return Err(ConvoyError::from(InfraError::from(err)));
        }

        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write();
        let mut next = entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write();
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut next = entries.clone();
        next.remove(key);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let store = FileSessionStore::open(&path).unwrap();
        store.set("CONVOY_ORG", r#"{"uid":"org-1"}"#).unwrap();
        store.set("CONVOY_PROJECT", r#""proj-1""#).unwrap();
        drop(store);

        let reopened = FileSessionStore::open(&path).unwrap();
        assert_eq!(reopened.get("CONVOY_ORG").unwrap().as_deref(), Some(r#"{"uid":"org-1"}"#));

        reopened.remove("CONVOY_PROJECT").unwrap();
        let again = FileSessionStore::open(&path).unwrap();
        assert!(again.get("CONVOY_PROJECT").unwrap().is_none());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_empty_file_is_empty_session() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "").unwrap();

        let store = FileSessionStore::open(&path).unwrap();
        assert!(store.get("CONVOY_ORG").unwrap().is_none());
    }

    #[test]
    fn test_corrupt_file_is_session_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "[1, 2").unwrap();

        assert!(matches!(FileSessionStore::open(&path), Err(ConvoyError::Session(_))));
    }

    #[test]
    fn test_failed_write_leaves_session_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let store = FileSessionStore::open(&path).unwrap();
        store.set("CONVOY_ORG", r#"{"uid":"org-1"}"#).unwrap();

        // A regular file where the parent directory should be makes every write fail.
        let blocked = dir.path().join("blocker");
        fs::write(&blocked, "").unwrap();
        let broken = FileSessionStore { path: blocked.join("session.json"), ..store };

        assert!(broken.set("CONVOY_ORG", r#"{"uid":"org-2"}"#).is_err());
        assert_eq!(broken.get("CONVOY_ORG").unwrap().as_deref(), Some(r#"{"uid":"org-1"}"#));

        assert!(broken.remove("CONVOY_ORG").is_err());
        assert!(broken.get("CONVOY_ORG").unwrap().is_some());
    }
}
