//! Summary card formatting
//!
//! Text versions of the three summary cards: monthly budget, total spent,
//! and top categories.

use crate::services::aggregation::{BudgetStatus, MonthlySummary};

/// Width of the text progress bars
pub const BAR_WIDTH: usize = 30;

/// Draw a progress bar for a 0..=100 percentage
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Short label for a budget status
pub fn status_label(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::Unset => "no budget",
        BudgetStatus::OnTrack => "on track",
        BudgetStatus::Warning => "nearing limit",
        BudgetStatus::Over => "over budget",
    }
}

/// The monthly budget card
pub fn format_budget_card(summary: &MonthlySummary, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Monthly Budget - {}\n", summary.month.label()));

    if summary.status == BudgetStatus::Unset {
        output.push_str("  No budget set\n");
        output.push_str("  Set one with 'expense budget set <amount>'\n");
        return output;
    }

    output.push_str(&format!(
        "  Budget:    {}\n",
        summary.budget.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "  Spent:     {}\n",
        summary.total.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "  Remaining: {}\n",
        summary.remaining_label(currency_symbol)
    ));
    output.push_str(&format!(
        "  {} {:.1}% ({})\n",
        progress_bar(summary.progress_fill(), BAR_WIDTH),
        summary.progress,
        status_label(summary.status)
    ));

    output
}

/// The total-spent card
pub fn format_total_card(summary: &MonthlySummary, currency_symbol: &str) -> String {
    let noun = if summary.expense_count == 1 {
        "expense"
    } else {
        "expenses"
    };
    format!(
        "Total Spent\n  {}\n  {} {} recorded\n",
        summary.total.format_with_symbol(currency_symbol),
        summary.expense_count,
        noun
    )
}

/// The top-categories card
pub fn format_top_categories(summary: &MonthlySummary, currency_symbol: &str) -> String {
    let mut output = String::from("Top Categories\n");

    if summary.top_categories.is_empty() {
        output.push_str("  No expenses this month\n");
        return output;
    }

    let name_width = summary
        .top_categories
        .iter()
        .map(|c| c.category.name().chars().count())
        .max()
        .unwrap_or(8);

    for ranked in &summary.top_categories {
        output.push_str(&format!(
            "  {:<name_width$}  {:>12}  {}\n",
            ranked.category.name(),
            ranked.amount.format_with_symbol(currency_symbol),
            progress_bar(ranked.share_of_max, BAR_WIDTH / 2),
            name_width = name_width,
        ));
    }

    output
}

/// All three cards, separated by blank lines
pub fn format_summary(summary: &MonthlySummary, currency_symbol: &str) -> String {
    [
        format_budget_card(summary, currency_symbol),
        format_total_card(summary, currency_symbol),
        format_top_categories(summary, currency_symbol),
    ]
    .join("\n")
}
