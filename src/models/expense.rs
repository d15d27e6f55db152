//! Expense model
//!
//! An expense is a single spending event on a calendar day. Expenses are
//! immutable once created; the only lifecycle operation after creation is
//! deletion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::ExpenseId;
use super::money::{Money, MAX_AMOUNT};

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Calendar day of the expense (`YYYY-MM-DD` on disk)
    pub date: NaiveDate,

    /// What the money was spent on
    pub name: String,

    /// Amount spent, never negative
    pub amount: Money,

    /// Spending category
    pub category: Category,
}

impl Expense {
    /// Attach an id to a new expense
    pub fn from_new(id: ExpenseId, new: NewExpense) -> Self {
        Self {
            id,
            date: new.date,
            name: new.name,
            amount: new.amount,
            category: new.category,
        }
    }

    /// Check the record against the data model rules
    pub fn validate(&self) -> Result<(), String> {
        if self.id.as_str().trim().is_empty() {
            return Err("expense id is empty".into());
        }
        if self.name.trim().is_empty() {
            return Err(format!("expense {} has an empty name", self.id));
        }
        if self.amount.is_negative() {
            return Err(format!("expense {} has a negative amount", self.id));
        }
        if self.amount > MAX_AMOUNT {
            return Err(format!("expense {} has an amount above {}", self.id, MAX_AMOUNT));
        }
        Ok(())
    }
}

/// An expense that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub name: String,
    pub amount: Money,
    pub category: Category,
}

impl NewExpense {
    pub fn new(
        date: NaiveDate,
        name: impl Into<String>,
        amount: Money,
        category: Category,
    ) -> Self {
        Self {
            date,
            name: name.into(),
            amount,
            category,
        }
    }
}

/// Raw add-expense form input
///
/// Mirrors the three form fields. Submission is blocked (not an error)
/// whenever any field is invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub name: String,
    pub amount: String,
    pub category: String,
}

impl ExpenseForm {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            category: category.into(),
        }
    }

    /// Human-readable reasons the form cannot be submitted
    pub fn problems(&self) -> Vec<&'static str> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push("Expense name is required");
        }
        match Money::parse(&self.amount) {
            Ok(amount) if amount.is_negative() => problems.push("Amount cannot be negative"),
            Ok(amount) if amount > MAX_AMOUNT => problems.push("Amount is too large"),
            Ok(_) => {}
            Err(_) => problems.push("Amount must be a number"),
        }
        if Category::from_input(&self.category).is_none() {
            problems.push("Category is required");
        }
        problems
    }

    /// Turn the form into a new expense for `date`, or `None` if invalid
    pub fn validate(&self, date: NaiveDate) -> Option<NewExpense> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        let amount = Money::parse(&self.amount).ok()?;
        if !amount.is_storable() {
            return None;
        }
        let category = Category::from_input(&self.category)?;
        Some(NewExpense::new(date, name, amount, category))
    }
}

/// Parse budget dialog input
///
/// Empty or non-numeric input counts as zero, and so does a negative or
/// out-of-range amount.
pub fn parse_budget_input(input: &str) -> Money {
    match Money::parse(input) {
        Ok(amount) if amount.is_storable() => amount,
        _ => Money::zero(),
    }
}
