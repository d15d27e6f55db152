//! Storage layer for the expense calendar
//!
//! Provides the key-value persistence adapters and atomic file writes.
//! Two keys are used: one for the expense collection, one for the budget
//! mapping.

pub mod file_io;
pub mod kv;

pub use file_io::{read_text, write_json_atomic, write_text_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};

use crate::config::paths::ExpensePaths;

/// Key holding the JSON array of expenses
pub const EXPENSES_KEY: &str = "expenses";

/// Key holding the JSON object of monthly budgets
pub const BUDGETS_KEY: &str = "budgets";

/// Open the file-backed store inside the configured data directory
pub fn open_file_store(paths: &ExpensePaths) -> FileStore {
    FileStore::new(paths.data_dir())
}
