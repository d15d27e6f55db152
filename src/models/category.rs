//! Expense categories
//!
//! The add-expense form offers a fixed list of categories. Records written by
//! other tools may carry any text, which is kept verbatim as `Custom`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Category of an expense
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    FoodAndDining,
    Transportation,
    Shopping,
    Entertainment,
    BillsAndUtilities,
    Healthcare,
    Travel,
    Education,
    Other,
    /// Free-text category outside the fixed list
    Custom(String),
}

impl Category {
    /// The fixed categories, in the order the form presents them
    pub const ALL: [Category; 9] = [
        Category::FoodAndDining,
        Category::Transportation,
        Category::Shopping,
        Category::Entertainment,
        Category::BillsAndUtilities,
        Category::Healthcare,
        Category::Travel,
        Category::Education,
        Category::Other,
    ];

    /// Display name of the category
    pub fn name(&self) -> &str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::BillsAndUtilities => "Bills & Utilities",
            Self::Healthcare => "Healthcare",
            Self::Travel => "Travel",
            Self::Education => "Education",
            Self::Other => "Other",
            Self::Custom(name) => name,
        }
    }

    /// Whether this is one of the fixed categories
    pub fn is_standard(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Build a category from user text
    ///
    /// Fixed names match case-insensitively; anything else is kept as a
    /// custom category. Returns `None` for blank input.
    pub fn from_input(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let standard = Self::ALL
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .cloned();

        Some(standard.unwrap_or_else(|| Self::Custom(trimmed.to_string())))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_input(s).ok_or_else(|| "Category cannot be empty".to_string())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_input(&raw).ok_or_else(|| serde::de::Error::custom("empty category"))
    }
}
