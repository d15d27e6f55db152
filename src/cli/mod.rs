//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{
    handle_add, handle_calendar, handle_categories, handle_delete, handle_list, handle_show,
    handle_summary, AddArgs,
};

use chrono::{Duration, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::MonthKey;
use crate::services::navigation::resolve_month;

/// Resolve an optional `--month` argument, defaulting to the current month
pub fn parse_month_arg(month: Option<&str>, today: NaiveDate) -> ExpenseResult<MonthKey> {
    match month {
        Some(m) => resolve_month(m, today),
        None => Ok(MonthKey::containing(today)),
    }
}

/// Parse a `--date` argument: `YYYY-MM-DD`, `today` or `yesterday`
pub fn parse_date_arg(date: &str, today: NaiveDate) -> ExpenseResult<NaiveDate> {
    match date.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "yesterday" => Ok(today - Duration::days(1)),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d").map_err(|_| {
            ExpenseError::Validation(format!(
                "Invalid date '{}'. Use YYYY-MM-DD format",
                date
            ))
        }),
    }
}
