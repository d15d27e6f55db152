//! Expense display formatting
//!
//! Formats expenses for terminal output in list and detail views.

use chrono::NaiveDate;

use crate::models::{Expense, Money};

/// Format expenses as a table, with a total row
pub fn format_expense_list(expenses: &[&Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let name_width = expenses
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let category_width = expenses
        .iter()
        .map(|e| e.category.name().chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:<name_width$}  {:<category_width$}  {:>12}  {}\n",
        "Date",
        "Name",
        "Category",
        "Amount",
        "ID",
        name_width = name_width,
        category_width = category_width,
    ));
    output.push_str(&format!(
        "{:-<10}  {:-<name_width$}  {:-<category_width$}  {:->12}  {:-<12}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        category_width = category_width,
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<10}  {:<name_width$}  {:<category_width$}  {:>12}  {}\n",
            expense.date.format("%Y-%m-%d").to_string(),
            expense.name,
            expense.category.name(),
            expense.amount.format_with_symbol(currency_symbol),
            expense.id.short(),
            name_width = name_width,
            category_width = category_width,
        ));
    }

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&format!(
        "{:<10}  {:<name_width$}  {:<category_width$}  {:>12}\n",
        "",
        "Total",
        "",
        total.format_with_symbol(currency_symbol),
        name_width = name_width,
        category_width = category_width,
    ));

    output
}

/// Format a single expense
pub fn format_expense_details(expense: &Expense, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.name));
    output.push_str(&format!("  ID:       {}\n", expense.id.as_str()));
    output.push_str(&format!("  Date:     {}\n", expense.date.format("%A, %B %-d, %Y")));
    output.push_str(&format!(
        "  Amount:   {}\n",
        expense.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("  Category: {}\n", expense.category));

    output
}

/// Format the expenses of one day under a date heading
pub fn format_day(date: NaiveDate, expenses: &[&Expense], currency_symbol: &str) -> String {
    let mut output = format!("{}\n", date.format("%A, %B %-d, %Y"));

    if expenses.is_empty() {
        output.push_str("  No expenses for this day\n");
        return output;
    }

    for expense in expenses {
        output.push_str(&format!(
            "  {:<12} {} ({}) {}\n",
            expense.id.short(),
            expense.name,
            expense.category,
            expense.amount.format_with_symbol(currency_symbol)
        ));
    }

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&format!("  Total: {}\n", total.format_with_symbol(currency_symbol)));

    output
}
