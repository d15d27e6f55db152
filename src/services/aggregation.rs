//! Monthly aggregation
//!
//! Pure functions over the expense collection for one month: total spend,
//! per-category totals, and budget remaining/progress. Everything is
//! recomputed on demand.

use crate::models::{Category, Expense, Money, MonthKey};

/// Default number of categories in the ranking
pub const DEFAULT_TOP_CATEGORIES: usize = 5;

/// Default utilization percentage above which a budget is flagged
pub const DEFAULT_WARNING_THRESHOLD: f64 = 80.0;

/// Expenses whose date falls in `month`, in insertion order
pub fn monthly_expenses(expenses: &[Expense], month: MonthKey) -> Vec<&Expense> {
    expenses.iter().filter(|e| month.contains(e.date)).collect()
}

/// Sum of the amounts
pub fn total<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> Money {
    expenses.into_iter().map(|e| e.amount).sum()
}

/// Summed amount per category, in first-encountered order
pub fn category_totals<'a>(
    expenses: impl IntoIterator<Item = &'a Expense>,
) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(entry) => {
                entry.amount += expense.amount;
                entry.count += 1;
            }
            None => totals.push(CategoryTotal {
                category: expense.category.clone(),
                amount: expense.amount,
                count: 1,
            }),
        }
    }

    totals
}

/// The `limit` largest category totals, descending
///
/// Ties keep first-encountered order.
pub fn top_categories(mut totals: Vec<CategoryTotal>, limit: usize) -> Vec<CategoryTotal> {
    // sort_by is stable
    totals.sort_by(|a, b| b.amount.cmp(&a.amount));
    totals.truncate(limit);
    totals
}

/// Budget minus spend; negative when over budget
pub fn budget_remaining(budget: Money, total: Money) -> Money {
    budget - total
}

/// Spend as a percentage of budget, or 0 when no budget is set
pub fn budget_progress(budget: Money, total: Money) -> f64 {
    if budget.is_positive() {
        total.cents() as f64 / budget.cents() as f64 * 100.0
    } else {
        0.0
    }
}

/// Summed spending of one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub amount: Money,
    /// Number of expenses contributing
    pub count: usize,
}

/// How spending compares to the month's budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// No budget set for the month
    Unset,
    /// At or below the warning threshold
    OnTrack,
    /// Above the warning threshold, not yet over
    Warning,
    /// Spend exceeds the budget
    Over,
}

impl BudgetStatus {
    /// Classify a progress percentage
    pub fn from_progress(budget: Money, progress: f64, warning_threshold: f64) -> Self {
        if !budget.is_positive() {
            Self::Unset
        } else if progress > 100.0 {
            Self::Over
        } else if progress > warning_threshold {
            Self::Warning
        } else {
            Self::OnTrack
        }
    }
}

/// A category row of the summary, with its bar width
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCategory {
    pub category: Category,
    pub amount: Money,
    pub count: usize,
    /// Amount relative to the largest category, 0..=100
    pub share_of_max: f64,
}

/// Everything the summary cards show for one month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: MonthKey,
    pub expense_count: usize,
    pub total: Money,
    pub budget: Money,
    pub remaining: Money,
    pub progress: f64,
    pub status: BudgetStatus,
    pub top_categories: Vec<RankedCategory>,
}

impl MonthlySummary {
    /// Aggregate `expenses` for `month` against `budget`
    pub fn compute(
        expenses: &[Expense],
        month: MonthKey,
        budget: Money,
        top_n: usize,
        warning_threshold: f64,
    ) -> Self {
        let in_month = monthly_expenses(expenses, month);
        let total = total(in_month.iter().copied());
        let progress = budget_progress(budget, total);

        let ranked = top_categories(category_totals(in_month.iter().copied()), top_n);
        let max = ranked.first().map(|t| t.amount).unwrap_or_default();
        let top_categories = ranked
            .into_iter()
            .map(|t| RankedCategory {
                share_of_max: if max.is_positive() {
                    t.amount.cents() as f64 / max.cents() as f64 * 100.0
                } else {
                    0.0
                },
                category: t.category,
                amount: t.amount,
                count: t.count,
            })
            .collect();

        Self {
            month,
            expense_count: in_month.len(),
            total,
            budget,
            remaining: budget_remaining(budget, total),
            progress,
            status: BudgetStatus::from_progress(budget, progress, warning_threshold),
            top_categories,
        }
    }

    /// Progress clamped to 100 for drawing a bar
    pub fn progress_fill(&self) -> f64 {
        self.progress.clamp(0.0, 100.0)
    }

    /// Whether spend exceeds the budget
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }

    /// Remaining amount as shown on the budget card, e.g. "₱20.00 over"
    pub fn remaining_label(&self, currency_symbol: &str) -> String {
        let word = if self.is_over_budget() { "over" } else { "left" };
        format!(
            "{} {}",
            self.remaining.abs().format_with_symbol(currency_symbol),
            word
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, NewExpense};
    use chrono::NaiveDate;

    fn expense(y: i32, m: u32, d: u32, cents: i64, category: Category) -> Expense {
        Expense::from_new(
            ExpenseId::new(),
            NewExpense::new(
                NaiveDate::from_ymd_opt(y, m, d).unwrap(),
                "item",
                Money::from_cents(cents),
                category,
            ),
        )
    }

    fn march() -> MonthKey {
        MonthKey::from_month_number(2024, 3)
    }

    #[test]
    fn test_monthly_filter_and_total() {
        let expenses = vec![
            expense(2024, 3, 1, 1000, Category::Shopping),
            expense(2024, 3, 31, 500, Category::Travel),
            expense(2024, 4, 1, 9999, Category::Travel),
            expense(2023, 3, 15, 9999, Category::Travel),
        ];

        let in_month = monthly_expenses(&expenses, march());
        assert_eq!(in_month.len(), 2);
        assert_eq!(total(in_month).cents(), 1500);
    }

    #[test]
    fn test_category_totals_sum_to_total() {
        let expenses = vec![
            expense(2024, 3, 1, 1000, Category::Shopping),
            expense(2024, 3, 2, 250, Category::FoodAndDining),
            expense(2024, 3, 3, 750, Category::Shopping),
            expense(2024, 3, 4, 125, Category::Travel),
        ];

        let totals = category_totals(&expenses);
        assert_eq!(totals.len(), 3);
        assert_eq!(totals[0].category, Category::Shopping);
        assert_eq!(totals[0].amount.cents(), 1750);
        assert_eq!(totals[0].count, 2);

        let sum: Money = totals.iter().map(|t| t.amount).sum();
        assert_eq!(sum, total(&expenses));
    }

    #[test]
    fn test_top_categories_limit_order_and_ties() {
        let expenses = vec![
            expense(2024, 3, 1, 100, Category::Other),
            expense(2024, 3, 1, 500, Category::Travel),
            expense(2024, 3, 1, 300, Category::Education),
            expense(2024, 3, 1, 300, Category::Healthcare),
            expense(2024, 3, 1, 200, Category::Shopping),
            expense(2024, 3, 1, 900, Category::Entertainment),
            expense(2024, 3, 1, 50, Category::Transportation),
        ];

        let top = top_categories(category_totals(&expenses), 5);
        let order: Vec<&Category> = top.iter().map(|t| &t.category).collect();
        assert_eq!(
            order,
            vec![
                &Category::Entertainment,
                &Category::Travel,
                &Category::Education,
                &Category::Healthcare,
                &Category::Shopping,
            ]
        );
        assert!(top.windows(2).all(|w| w[0].amount >= w[1].amount));
    }

    #[test]
    fn test_budget_math() {
        let budget = Money::from_cents(10000);
        let spent = Money::from_cents(12000);

        assert_eq!(budget_remaining(budget, spent).cents(), -2000);
        assert_eq!(budget_progress(budget, spent), 120.0);
        assert_eq!(budget_progress(Money::zero(), spent), 0.0);
        assert_eq!(budget_progress(budget, Money::zero()), 0.0);
        assert_eq!(budget_progress(Money::from_cents(400), Money::from_cents(100)), 25.0);
    }

    #[test]
    fn test_budget_status() {
        let budget = Money::from_cents(10000);
        assert_eq!(BudgetStatus::from_progress(Money::zero(), 0.0, 80.0), BudgetStatus::Unset);
        assert_eq!(BudgetStatus::from_progress(budget, 80.0, 80.0), BudgetStatus::OnTrack);
        assert_eq!(BudgetStatus::from_progress(budget, 80.5, 80.0), BudgetStatus::Warning);
        assert_eq!(BudgetStatus::from_progress(budget, 100.0, 80.0), BudgetStatus::Warning);
        assert_eq!(BudgetStatus::from_progress(budget, 100.1, 80.0), BudgetStatus::Over);
    }

    #[test]
    fn test_single_lunch_scenario() {
        let expenses = vec![expense(2024, 3, 15, 1250, Category::FoodAndDining)];
        let summary = MonthlySummary::compute(
            &expenses,
            march(),
            Money::zero(),
            DEFAULT_TOP_CATEGORIES,
            DEFAULT_WARNING_THRESHOLD,
        );

        assert_eq!(summary.total.cents(), 1250);
        assert_eq!(summary.expense_count, 1);
        assert_eq!(summary.top_categories.len(), 1);
        assert_eq!(summary.top_categories[0].category, Category::FoodAndDining);
        assert_eq!(summary.top_categories[0].amount.cents(), 1250);
        assert_eq!(summary.top_categories[0].share_of_max, 100.0);
        assert_eq!(summary.progress, 0.0);
        assert_eq!(summary.status, BudgetStatus::Unset);
    }

    #[test]
    fn test_over_budget_scenario() {
        let expenses = vec![
            expense(2024, 3, 2, 7000, Category::BillsAndUtilities),
            expense(2024, 3, 9, 5000, Category::FoodAndDining),
        ];
        let summary = MonthlySummary::compute(
            &expenses,
            march(),
            Money::from_cents(10000),
            DEFAULT_TOP_CATEGORIES,
            DEFAULT_WARNING_THRESHOLD,
        );

        assert_eq!(summary.remaining.cents(), -2000);
        assert_eq!(summary.progress, 120.0);
        assert_eq!(summary.progress_fill(), 100.0);
        assert_eq!(summary.status, BudgetStatus::Over);
        assert!(summary.is_over_budget());
        assert_eq!(summary.remaining_label("₱"), "₱20.00 over");

        let shares: Vec<f64> = summary.top_categories.iter().map(|c| c.share_of_max).collect();
        assert_eq!(shares[0], 100.0);
        assert!((shares[1] - 5000.0 / 7000.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_under_budget_label() {
        let summary = MonthlySummary::compute(
            &[expense(2024, 3, 2, 2000, Category::Other)],
            march(),
            Money::from_cents(10000),
            DEFAULT_TOP_CATEGORIES,
            DEFAULT_WARNING_THRESHOLD,
        );
        assert_eq!(summary.remaining_label("₱"), "₱80.00 left");
        assert_eq!(summary.status, BudgetStatus::OnTrack);
    }

    #[test]
    fn test_empty_month() {
        let summary = MonthlySummary::compute(
            &[],
            march(),
            Money::zero(),
            DEFAULT_TOP_CATEGORIES,
            DEFAULT_WARNING_THRESHOLD,
        );
        assert_eq!(summary.total, Money::zero());
        assert!(summary.top_categories.is_empty());
        assert_eq!(summary.progress, 0.0);
    }

    #[test]
    fn test_huge_amounts_never_wrap_negative() {
        let expenses = vec![
            expense(2024, 3, 1, 9_000_000_000_000_000_000, Category::Other),
            expense(2024, 3, 2, 9_000_000_000_000_000_000, Category::Other),
        ];
        let summary = MonthlySummary::compute(
            &expenses,
            march(),
            Money::from_cents(10000),
            DEFAULT_TOP_CATEGORIES,
            DEFAULT_WARNING_THRESHOLD,
        );
        assert_eq!(summary.total.cents(), i64::MAX);
        assert!(summary.is_over_budget());
        assert_eq!(summary.top_categories[0].amount.cents(), i64::MAX);
    }
}
