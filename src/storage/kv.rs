//! Key-value persistence adapters
//!
//! The expense store only needs `get`/`set` of whole serialized collections
//! by key. `FileStore` keeps one file per key in the data directory;
//! `MemoryStore` keeps everything in a map and is used by tests and previews.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::ExpenseError;

use super::file_io::{read_text, write_text_atomic};

/// String-keyed storage of serialized values
pub trait KeyValueStore {
    /// Fetch the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, ExpenseError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: String) -> Result<(), ExpenseError>;
}

/// Directory-backed store: key `k` lives in `<dir>/k.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir` (created lazily on first write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the key files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf, ExpenseError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ExpenseError::Storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, ExpenseError> {
        read_text(self.path_for(key)?)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), ExpenseError> {
        write_text_atomic(self.path_for(key)?, &value)
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, e.g. to simulate existing data
    pub fn with_entry(mut self, key: &str, value: impl Into<String>) -> Self {
        self.entries.insert(key.to_string(), value.into());
        self
    }

    /// Raw value under `key`
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ExpenseError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), ExpenseError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
