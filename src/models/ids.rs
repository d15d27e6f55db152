//! Expense identifiers
//!
//! An expense id is an opaque string. New ids are random UUIDs; ids already
//! present in stored data (for example millisecond timestamps) are accepted
//! as-is.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "exp-";

/// Unique identifier of an expense
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing id string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The full id string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form shown in listings, e.g. `exp-1a2b3c4d`
    pub fn short(&self) -> String {
        let head: String = self.0.chars().take(8).collect();
        format!("{}{}", DISPLAY_PREFIX, head)
    }

    /// Whether user input refers to this id
    ///
    /// Accepts the full id, the short form, or a prefix of the id with or
    /// without the `exp-` display prefix.
    pub fn matches(&self, input: &str) -> bool {
        let input = input.trim();
        if input.is_empty() {
            return false;
        }
        if self.0 == input {
            return true;
        }
        let bare = input.strip_prefix(DISPLAY_PREFIX).unwrap_or(input);
        !bare.is_empty() && self.0.starts_with(bare)
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short())
    }
}

impl From<&str> for ExpenseId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
