//! Month navigation
//!
//! `MonthCursor` tracks which month is on screen. It stores only year and
//! month, so stepping forward from the 31st never skips a short month.

use chrono::{Datelike, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::MonthKey;

/// Years offered on either side of the current year
pub const YEAR_OPTION_SPAN: i32 = 5;

/// The month currently being viewed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    month: MonthKey,
}

impl MonthCursor {
    pub fn new(month: MonthKey) -> Self {
        Self { month }
    }

    /// Cursor on the month containing `today`
    pub fn current(today: NaiveDate) -> Self {
        Self::new(MonthKey::containing(today))
    }

    pub fn month(&self) -> MonthKey {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.month.year()
    }

    pub fn month_index(&self) -> u32 {
        self.month.month_index()
    }

    /// English name of the viewed month
    pub fn month_name(&self) -> &'static str {
        self.month.month_name()
    }

    /// Step back one month
    pub fn prev(&mut self) {
        self.month = self.month.prev();
    }

    /// Step forward one month
    pub fn next(&mut self) {
        self.month = self.month.next();
    }

    /// Jump to a zero-based month within the current year (clamped to 0..=11)
    pub fn set_month_index(&mut self, index: u32) {
        self.month = MonthKey::normalized(self.year(), index.min(11) as i64);
    }

    /// Jump to a year, keeping the month
    pub fn set_year(&mut self, year: i32) {
        self.month = MonthKey::normalized(year, self.month_index() as i64);
    }

    /// Jump to the month containing `today`
    pub fn reset(&mut self, today: NaiveDate) {
        self.month = MonthKey::containing(today);
    }

    /// Whether the cursor is on the month containing `today`
    pub fn is_current(&self, today: NaiveDate) -> bool {
        self.month.contains(today)
    }
}

/// Selectable years: five before through five after `today`'s year
pub fn year_options(today: NaiveDate) -> Vec<i32> {
    let year = today.year();
    ((year - YEAR_OPTION_SPAN)..=(year + YEAR_OPTION_SPAN)).collect()
}

/// Resolve a month argument relative to `today`
///
/// Accepts `YYYY-MM` (one-based month), `current`/`this`, `prev`/`last`,
/// and `next`.
pub fn resolve_month(input: &str, today: NaiveDate) -> ExpenseResult<MonthKey> {
    let current = MonthKey::containing(today);
    match input.trim().to_lowercase().as_str() {
        "" | "current" | "this" => Ok(current),
        "prev" | "last" | "previous" => Ok(current.prev()),
        "next" => Ok(current.next()),
        other => MonthKey::parse_human(other).map_err(|_| {
            ExpenseError::Validation(format!(
                "Invalid month '{}'. Use YYYY-MM, current, prev or next",
                input
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_current_and_step() {
        let mut cursor = MonthCursor::current(date(2024, 1, 31));
        assert_eq!(cursor.month_name(), "January");

        cursor.next();
        assert_eq!(cursor.month(), MonthKey::from_month_number(2024, 2));
        cursor.next();
        assert_eq!(cursor.month(), MonthKey::from_month_number(2024, 3));

        cursor.prev();
        cursor.prev();
        cursor.prev();
        assert_eq!(cursor.month(), MonthKey::from_month_number(2023, 12));
        assert_eq!(cursor.year(), 2023);
    }

    #[test]
    fn test_set_month_and_year() {
        let mut cursor = MonthCursor::current(date(2024, 3, 10));

        cursor.set_month_index(11);
        assert_eq!(cursor.month_name(), "December");
        assert_eq!(cursor.year(), 2024);

        cursor.set_month_index(40);
        assert_eq!(cursor.month_index(), 11);

        cursor.set_year(2019);
        assert_eq!(cursor.month(), MonthKey::from_month_number(2019, 12));
    }

    #[test]
    fn test_reset_and_is_current() {
        let today = date(2024, 3, 10);
        let mut cursor = MonthCursor::current(today);
        cursor.next();
        assert!(!cursor.is_current(today));

        cursor.reset(today);
        assert!(cursor.is_current(today));
    }

    #[test]
    fn test_year_options() {
        let years = year_options(date(2024, 6, 1));
        assert_eq!(years.len(), 11);
        assert_eq!(years.first(), Some(&2019));
        assert_eq!(years.last(), Some(&2029));
    }

    #[test]
    fn test_resolve_month() {
        let today = date(2024, 1, 15);
        assert_eq!(
            resolve_month("current", today).unwrap(),
            MonthKey::from_month_number(2024, 1)
        );
        assert_eq!(
            resolve_month("prev", today).unwrap(),
            MonthKey::from_month_number(2023, 12)
        );
        assert_eq!(
            resolve_month("LAST", today).unwrap(),
            MonthKey::from_month_number(2023, 12)
        );
        assert_eq!(
            resolve_month("next", today).unwrap(),
            MonthKey::from_month_number(2024, 2)
        );
        assert_eq!(
            resolve_month("2024-03", today).unwrap(),
            MonthKey::from_month_number(2024, 3)
        );

        let err = resolve_month("2024-13", today).unwrap_err();
        assert!(err.is_validation());
        assert!(resolve_month("march", today).is_err());
    }
}
