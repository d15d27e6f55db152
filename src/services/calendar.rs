//! Calendar date-grid builder
//!
//! Lays out one month as a Sunday-first grid: blank cells for the weekdays
//! before the 1st, then one cell per day carrying that day's expenses and
//! their total.

use chrono::NaiveDate;

use crate::models::{Expense, Money, MonthKey};

/// Weekday column headers, Sunday first
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A single day of the grid
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    /// Day of month (1-based)
    pub day: u32,
    /// Calendar date of the cell
    pub date: NaiveDate,
    /// Whether this cell is the real-world current date
    pub is_today: bool,
    /// Expenses recorded on this day, in insertion order
    pub expenses: Vec<Expense>,
    /// Sum of the day's expense amounts
    pub total: Money,
}

impl DayCell {
    pub fn has_expenses(&self) -> bool {
        !self.expenses.is_empty()
    }

    /// The first `limit` expense names plus how many were left out
    pub fn preview(&self, limit: usize) -> (Vec<&str>, usize) {
        let names = self
            .expenses
            .iter()
            .take(limit)
            .map(|e| e.name.as_str())
            .collect();
        (names, self.expenses.len().saturating_sub(limit))
    }
}

/// One position of the grid
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarCell {
    /// Placeholder before the 1st of the month (or padding after the last day)
    Blank,
    Day(DayCell),
}

impl CalendarCell {
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            Self::Day(day) => Some(day),
            Self::Blank => None,
        }
    }
}

/// A month laid out as calendar cells
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarGrid {
    month: MonthKey,
    cells: Vec<CalendarCell>,
}

impl CalendarGrid {
    /// Month shown by the grid
    pub fn month(&self) -> MonthKey {
        self.month
    }

    /// Cells in display order: leading blanks, then days 1..=N
    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    /// Number of blank cells before the 1st
    pub fn leading_blanks(&self) -> usize {
        self.cells
            .iter()
            .take_while(|c| matches!(c, CalendarCell::Blank))
            .count()
    }

    /// Day cells only
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(CalendarCell::as_day)
    }

    /// Cell for a day of the month
    pub fn day(&self, day: u32) -> Option<&DayCell> {
        if day == 0 {
            return None;
        }
        self.cells
            .get(self.leading_blanks() + day as usize - 1)
            .and_then(CalendarCell::as_day)
    }

    /// Rows of seven cells, the last row padded with blanks
    pub fn weeks(&self) -> Vec<Vec<CalendarCell>> {
        self.cells
            .chunks(7)
            .map(|week| {
                let mut row = week.to_vec();
                row.resize(7, CalendarCell::Blank);
                row
            })
            .collect()
    }
}

/// Build the grid for `month` from the full expense collection
///
/// `today` marks the current-date cell; passing it in keeps the build
/// deterministic.
pub fn build_month_grid(month: MonthKey, expenses: &[Expense], today: NaiveDate) -> CalendarGrid {
    let blanks = month.leading_blanks() as usize;
    let days_in_month = month.days_in_month();

    let mut cells = Vec::with_capacity(blanks + days_in_month as usize);
    cells.extend(std::iter::repeat(CalendarCell::Blank).take(blanks));

    for day in 1..=days_in_month {
        let Some(date) = month.day(day) else {
            continue;
        };

        let day_expenses: Vec<Expense> = expenses
            .iter()
            .filter(|e| e.date == date)
            .cloned()
            .collect();
        let total = day_expenses.iter().map(|e| e.amount).sum();

        cells.push(CalendarCell::Day(DayCell {
            day,
            date,
            is_today: date == today,
            expenses: day_expenses,
            total,
        }));
    }

    CalendarGrid { month, cells }
}
