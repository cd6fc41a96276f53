//! One JSON file per key under a data directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use multiview_common::StorageError;

use super::SessionStore;

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `<dir>/<key>.json`. Keys are restricted so they cannot escape `dir`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read(format!("{}: {e}", path.display()))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| StorageError::Write(format!("{}: {e}", self.dir.display())))?;

        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, value)
            .map_err(|e| StorageError::Write(format!("{}: {e}", tmp_path.display())))?;

        if let Err(e) = std::fs::rename(&tmp_path, &path) {
            tracing::warn!("atomic rename failed ({}), falling back to direct write", e);
            std::fs::write(&path, value)
                .map_err(|e2| StorageError::Write(format!("{}: {e2}", path.display())))?;
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Write(format!("{}: {e}", path.display()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn set_get_remove() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("data"));

        assert!(store.get("session").unwrap().is_none());
        store.set("session", r#"{"v":1}"#).unwrap();
        assert_eq!(store.get("session").unwrap().as_deref(), Some(r#"{"v":1}"#));
        assert!(!dir.path().join("data").join("session.json.tmp").exists());

        store.remove("session").unwrap();
        assert!(store.get("session").unwrap().is_none());
        store.remove("session").unwrap();
    }

    #[test]
    fn rejects_keys_that_leave_the_directory() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        assert!(matches!(
            store.set("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(store.get(""), Err(StorageError::InvalidKey(_))));
    }

    #[test]
    fn overwrite_replaces_contents() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
    }
}
