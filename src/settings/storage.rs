use std::{
    collections::{BTreeMap, HashMap},
    fs, io,
    path::{Path, PathBuf},
    sync::{Mutex, RwLock},
};

use thiserror::Error;
use tracing::debug;

/// Errors raised by a [`KeyValueStorage`] backend.
///
/// Callers in this crate never propagate these to the user; they are logged
/// and the settings fall back to defaults or stay in memory.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("storage I/O error on '{path}': {details}")]
    Io {
        /// Path of the backing file
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// The backing file exists but is not a JSON object of strings
    #[error("storage file '{path}' is corrupt: {details}")]
    Corrupt {
        /// Path of the backing file
        path: PathBuf,
        /// Parse error details
        details: String,
    },

    /// The storage cannot be used at all (disabled, poisoned lock, quota)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// String key-value storage with the shape of a browser's `localStorage`.
pub trait KeyValueStorage: Send + Sync {
    /// Returns the value stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    /// Returns `StorageError` if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns `StorageError` if the backend cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Storage kept only for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self
            .items
            .read()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".to_string()))?;

        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".to_string()))?;

        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage persisted as a single JSON object of string values on disk.
///
/// Every key shares one file; writes rewrite the whole file after merging the
/// new value into what is currently on disk.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    /// Creates storage backed by the file at `path`.
    ///
    /// The file and its parent directory are created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.io_error(&e)),
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            details: e.to_string(),
        })
    }

    fn io_error(&self, error: &io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            details: error.to_string(),
        }
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut items = self.read_items()?;
        Ok(items.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StorageError::Unavailable("file storage lock poisoned".to_string()))?;

        // A corrupt file is replaced rather than blocking every future write.
        let mut items = match self.read_items() {
            Ok(items) => items,
            Err(StorageError::Corrupt { .. }) => BTreeMap::new(),
            Err(e) => return Err(e),
        };
        items.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(&e))?;
        }

        let content = serde_json::to_string_pretty(&items).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            details: e.to_string(),
        })?;
        fs::write(&self.path, content).map_err(|e| self.io_error(&e))?;

        debug!(path = %self.path.display(), key, "Wrote storage item");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn memory_storage_returns_what_was_set() {
        let storage = MemoryStorage::new();

        assert_eq!(storage.get_item("key").unwrap(), None);
        storage.set_item("key", "value").unwrap();
        assert_eq!(storage.get_item("key").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn file_storage_missing_file_reads_as_empty() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().join("absent.json"));

        assert_eq!(storage.get_item("key").unwrap(), None);
    }

    #[test]
    fn file_storage_keeps_other_keys_on_write() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().join("nested/store.json"));

        storage.set_item("first", "1").unwrap();
        storage.set_item("second", "2").unwrap();

        assert_eq!(storage.get_item("first").unwrap().as_deref(), Some("1"));
        assert_eq!(storage.get_item("second").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn file_storage_reports_corrupt_file_and_recovers_on_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("store.json");
        fs::write(&path, "{ not json").unwrap();
        let storage = FileStorage::new(&path);

        assert!(matches!(
            storage.get_item("key"),
            Err(StorageError::Corrupt { .. })
        ));

        storage.set_item("key", "value").unwrap();
        assert_eq!(storage.get_item("key").unwrap().as_deref(), Some("value"));
    }
}
