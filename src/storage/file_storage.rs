use crate::errors::{Result, StorageError};
use crate::storage::storage_traits::StorageBackendTrait;
use log::warn;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// File-backed key-value storage: a single JSON object file mapping keys to
/// string values. Every `set` rewrites the whole file, so a mutation either
/// lands completely or not at all.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStorage { path: path.into() }
    }

    fn read_entries(&self) -> Result<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(&self.path).map_err(StorageError::from)?;
        let entries = serde_json::from_str(&raw).map_err(StorageError::from)?;
        Ok(entries)
    }
}

impl StorageBackendTrait for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.read_entries()?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // A file we can no longer parse carries nothing worth keeping;
        // start over rather than refuse every future write.
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    "replacing unreadable storage file {}: {}",
                    self.path.display(),
                    e
                );
                HashMap::new()
            }
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(StorageError::from)?;
        }
        let raw = serde_json::to_string(&entries).map_err(StorageError::from)?;
        fs::write(&self.path, raw).map_err(StorageError::from)?;
        Ok(())
    }
}
