//! Calendar month keys
//!
//! A `MonthKey` names one calendar month. Its canonical text form is
//! `"<year>-<zero-based-month-index>"`, so March 2024 is `"2024-2"`. That
//! form is what the budget mapping uses as JSON object keys.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// English month names, indexed by zero-based month
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Supported years; keys saturate at the ends so every key maps to a real date
const MIN_YEAR: i32 = -200_000;
const MAX_YEAR: i32 = 200_000;

/// A calendar month (year + zero-based month index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month_index: u32,
}

impl MonthKey {
    /// Create a key, carrying month overflow into the year
    ///
    /// `MonthKey::normalized(2024, 12)` is January 2025 and
    /// `MonthKey::normalized(2024, -1)` is December 2023.
    ///
    /// Months outside the supported years saturate at January of
    /// `MIN_YEAR` or December of `MAX_YEAR`.
    pub fn normalized(year: i32, month_index: i64) -> Self {
        let first = MIN_YEAR as i64 * 12;
        let last = MAX_YEAR as i64 * 12 + 11;
        let absolute = (year as i64 * 12).saturating_add(month_index).clamp(first, last);
        Self {
            year: absolute.div_euclid(12) as i32,
            month_index: absolute.rem_euclid(12) as u32,
        }
    }

    /// Create a key from a one-based month number (1 = January)
    pub fn from_month_number(year: i32, month: u32) -> Self {
        Self::normalized(year, month as i64 - 1)
    }

    /// The month containing a date
    pub fn containing(date: NaiveDate) -> Self {
        Self::normalized(date.year(), date.month0() as i64)
    }

    /// Year of this month
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month index (0 = January)
    pub fn month_index(&self) -> u32 {
        self.month_index
    }

    /// One-based month number (1 = January)
    pub fn month_number(&self) -> u32 {
        self.month_index + 1
    }

    /// English name of the month
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month_index as usize]
    }

    /// Human label, e.g. "March 2024"
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month_number(), 1).unwrap_or_default()
    }

    /// Last day of the month
    pub fn last_day(&self) -> NaiveDate {
        self.day(self.days_in_month()).unwrap_or_default()
    }

    /// A specific day of this month, if it exists
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month_number(), day)
    }

    /// Number of days in the month
    pub fn days_in_month(&self) -> u32 {
        match self.month_number() {
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Weekday of the 1st (Sunday = 0), i.e. blanks before day 1 in a grid
    pub fn leading_blanks(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month_index
    }

    /// Move by a number of months (negative goes back)
    pub fn offset(&self, months: i64) -> Self {
        Self::normalized(self.year, (self.month_index as i64).saturating_add(months))
    }

    /// The following month
    pub fn next(&self) -> Self {
        self.offset(1)
    }

    /// The preceding month
    pub fn prev(&self) -> Self {
        self.offset(-1)
    }

    /// Parse the human form `YYYY-MM` with a one-based month (`2024-03`)
    pub fn parse_human(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (year, month) = split_year_month(s)?;
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidFormat(s.to_string()));
        }
        Ok(Self::from_month_number(year, month))
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn split_year_month(s: &str) -> Result<(i32, u32), MonthParseError> {
    let invalid = || MonthParseError::InvalidFormat(s.to_string());
    let (year, month) = s.rsplit_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    Ok((year, month))
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.month_index)
    }
}

impl FromStr for MonthKey {
    type Err = MonthParseError;

    /// Parse the canonical key form `"<year>-<zero-based-month>"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (year, month_index) = split_year_month(s)?;
        if month_index > 11 {
            return Err(MonthParseError::InvalidFormat(s.to_string()));
        }
        Ok(Self::normalized(year, month_index as i64))
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
        }
    }
}

impl std::error::Error for MonthParseError {}
