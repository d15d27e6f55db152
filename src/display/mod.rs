//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses, the calendar grid and the
//! summary cards as plain text.

pub mod calendar;
pub mod category;
pub mod expense;
pub mod summary;

pub use calendar::format_calendar;
pub use category::format_category_list;
pub use expense::{format_day, format_expense_details, format_expense_list};
pub use summary::{format_budget_card, format_summary, format_top_categories, format_total_card};
