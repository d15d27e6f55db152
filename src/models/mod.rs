//! Core data models for the expense calendar
//!
//! This module contains the data structures of the expense domain:
//! expenses, categories, money amounts and month keys.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use category::Category;
pub use expense::{parse_budget_input, Expense, ExpenseForm, NewExpense};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError, MAX_AMOUNT};
pub use month::{MonthKey, MonthParseError, MONTH_NAMES};
