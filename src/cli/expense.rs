//! Expense CLI commands
//!
//! Implements adding, deleting and listing expenses, plus the calendar and
//! summary views.

use chrono::NaiveDate;
use clap::Args;
use tracing::debug;

use super::{parse_date_arg, parse_month_arg};
use crate::config::settings::Settings;
use crate::display::{
    format_calendar, format_category_list, format_day, format_expense_details, format_expense_list,
    format_summary,
};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseForm};
use crate::services::aggregation::{monthly_expenses, MonthlySummary};
use crate::services::calendar::build_month_grid;
use crate::services::store::ExpenseStore;
use crate::storage::KeyValueStore;

/// Arguments of `expense add`
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// What the money was spent on
    pub name: String,

    /// Amount (e.g., "12.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Category (e.g., "Food & Dining", or any custom text)
    #[arg(short, long)]
    pub category: String,

    /// Expense date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Record a new expense
pub fn handle_add<S: KeyValueStore>(
    store: &mut ExpenseStore<S>,
    settings: &Settings,
    args: AddArgs,
    today: NaiveDate,
) -> ExpenseResult<Expense> {
    let date = match args.date.as_deref() {
        Some(d) => parse_date_arg(d, today)?,
        None => today,
    };

    let form = ExpenseForm::new(args.name, args.amount, args.category);
    match store.submit(date, &form)? {
        Some(expense) => {
            println!(
                "Added expense: {} ({}) on {} [{}]",
                expense.name,
                expense.amount.format_with_symbol(&settings.currency_symbol),
                expense.date.format("%Y-%m-%d"),
                expense.id.short()
            );
            Ok(expense)
        }
        None => Err(ExpenseError::Validation(format!(
            "Expense not added: {}",
            form.problems().join("; ")
        ))),
    }
}

/// Show one expense by id or id prefix
pub fn handle_show<S: KeyValueStore>(
    store: &ExpenseStore<S>,
    settings: &Settings,
    id: &str,
) -> ExpenseResult<Expense> {
    let expense = store.find(id)?.clone();
    print!(
        "{}",
        format_expense_details(&expense, &settings.currency_symbol)
    );
    Ok(expense)
}

/// Delete an expense by id or id prefix
pub fn handle_delete<S: KeyValueStore>(
    store: &mut ExpenseStore<S>,
    settings: &Settings,
    id: &str,
) -> ExpenseResult<Expense> {
    let expense = store.find(id)?.clone();
    store.delete(&expense.id)?;

    println!(
        "Deleted expense: {} ({}) on {}",
        expense.name,
        expense.amount.format_with_symbol(&settings.currency_symbol),
        expense.date.format("%Y-%m-%d")
    );
    Ok(expense)
}

/// List the expenses of one day, or of a month (default: current month)
pub fn handle_list<S: KeyValueStore>(
    store: &ExpenseStore<S>,
    settings: &Settings,
    date: Option<&str>,
    month: Option<&str>,
    today: NaiveDate,
) -> ExpenseResult<()> {
    if let Some(date) = date {
        let date = parse_date_arg(date, today)?;
        print!(
            "{}",
            format_day(date, &store.expenses_on(date), &settings.currency_symbol)
        );
        return Ok(());
    }

    let month = parse_month_arg(month, today)?;
    let mut expenses = monthly_expenses(store.expenses(), month);
    // group by day; sort_by_key is stable so each day keeps insertion order
    expenses.sort_by_key(|e| e.date);
    debug!(month = %month, count = expenses.len(), "Listing expenses");

    println!("Expenses for {}", month.label());
    println!();
    print!(
        "{}",
        format_expense_list(&expenses, &settings.currency_symbol)
    );
    Ok(())
}

/// Print the text calendar for a month
pub fn handle_calendar<S: KeyValueStore>(
    store: &ExpenseStore<S>,
    settings: &Settings,
    month: Option<&str>,
    today: NaiveDate,
) -> ExpenseResult<()> {
    let month = parse_month_arg(month, today)?;
    let grid = build_month_grid(month, store.expenses(), today);
    print!(
        "{}",
        format_calendar(&grid, &settings.currency_symbol, settings.max_names_per_day)
    );
    Ok(())
}

/// Print the summary cards for a month
pub fn handle_summary<S: KeyValueStore>(
    store: &ExpenseStore<S>,
    settings: &Settings,
    month: Option<&str>,
    today: NaiveDate,
) -> ExpenseResult<MonthlySummary> {
    let month = parse_month_arg(month, today)?;
    let summary = MonthlySummary::compute(
        store.expenses(),
        month,
        store.budget_for(month),
        settings.top_category_count,
        settings.warning_threshold,
    );
    print!("{}", format_summary(&summary, &settings.currency_symbol));
    Ok(summary)
}

/// Print the fixed category list
pub fn handle_categories() {
    print!("{}", format_category_list());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, MonthKey};
    use crate::services::aggregation::BudgetStatus;
    use crate::storage::MemoryStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
    }

    fn add_args(name: &str, amount: &str, category: &str, date: Option<&str>) -> AddArgs {
        AddArgs {
            name: name.into(),
            amount: amount.into(),
            category: category.into(),
            date: date.map(String::from),
        }
    }

    #[test]
    fn test_add_defaults_to_today() {
        let mut store = ExpenseStore::load(MemoryStore::new());
        let settings = Settings::default();

        let expense = handle_add(
            &mut store,
            &settings,
            add_args("Lunch", "12.50", "food & dining", None),
            today(),
        )
        .unwrap();

        assert_eq!(expense.date, today());
        assert_eq!(expense.category, Category::FoodAndDining);
        assert_eq!(expense.amount, Money::from_cents(1250));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_rejects_invalid_form() {
        let mut store = ExpenseStore::load(MemoryStore::new());
        let settings = Settings::default();

        let err = handle_add(
            &mut store,
            &settings,
            add_args("", "abc", "Other", Some("2024-03-15")),
            today(),
        )
        .unwrap_err();

        assert!(err.is_validation());
        let message = err.to_string();
        assert!(message.contains("Expense not added"));
        assert!(message.contains("Expense name is required"));
        assert!(message.contains("Amount must be a number"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_rejects_bad_date() {
        let mut store = ExpenseStore::load(MemoryStore::new());
        let result = handle_add(
            &mut store,
            &Settings::default(),
            add_args("Lunch", "5", "Other", Some("15/03/2024")),
            today(),
        );
        assert!(result.is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_by_prefix() {
        let mut store = ExpenseStore::load(MemoryStore::new());
        let settings = Settings::default();
        let added = handle_add(
            &mut store,
            &settings,
            add_args("Taxi", "8", "Transportation", None),
            today(),
        )
        .unwrap();

        let deleted = handle_delete(&mut store, &settings, &added.id.short()).unwrap();
        assert_eq!(deleted.id, added.id);
        assert!(store.is_empty());

        let err = handle_delete(&mut store, &settings, "exp-ffffffff").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_show_by_prefix() {
        let mut store = ExpenseStore::load(MemoryStore::new());
        let settings = Settings::default();
        let added = handle_add(
            &mut store,
            &settings,
            add_args("Lunch", "12.50", "Food & Dining", None),
            today(),
        )
        .unwrap();

        let shown = handle_show(&store, &settings, &added.id.short()).unwrap();
        assert_eq!(shown, added);
        assert!(handle_show(&store, &settings, "exp-ffffffff")
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_summary_uses_stored_budget() {
        let mut store = ExpenseStore::load(MemoryStore::new());
        let settings = Settings::default();
        let march = MonthKey::from_month_number(2024, 3);
        store.set_budget(march, Money::from_cents(10000)).unwrap();
        handle_add(
            &mut store,
            &settings,
            add_args("Groceries", "120", "Shopping", Some("2024-03-02")),
            today(),
        )
        .unwrap();

        let summary = handle_summary(&store, &settings, Some("2024-03"), today()).unwrap();
        assert_eq!(summary.remaining.cents(), -2000);
        assert_eq!(summary.status, BudgetStatus::Over);
    }

    #[test]
    fn test_list_and_calendar_accept_month_words() {
        let store = ExpenseStore::load(MemoryStore::new());
        let settings = Settings::default();

        assert!(handle_list(&store, &settings, None, Some("prev"), today()).is_ok());
        assert!(handle_list(&store, &settings, Some("today"), None, today()).is_ok());
        assert!(handle_calendar(&store, &settings, Some("next"), today()).is_ok());
        assert!(handle_calendar(&store, &settings, Some("soon"), today()).is_err());
    }
}
