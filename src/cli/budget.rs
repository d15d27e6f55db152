//! Budget CLI commands
//!
//! Implements setting and showing the monthly budget.

use chrono::NaiveDate;
use clap::Subcommand;

use super::parse_month_arg;
use crate::config::settings::Settings;
use crate::display::format_budget_card;
use crate::error::ExpenseResult;
use crate::models::parse_budget_input;
use crate::services::aggregation::MonthlySummary;
use crate::services::store::ExpenseStore;
use crate::storage::KeyValueStore;

/// Budget subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum BudgetCommands {
    /// Set the budget for a month
    Set {
        /// Amount (e.g., "5000" or "5000.00"); invalid input counts as zero
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Month (e.g., "2024-03", "current", "prev", "next")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show the budget card for a month
    Show {
        /// Month (e.g., "2024-03", "current", "prev", "next")
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command<S: KeyValueStore>(
    store: &mut ExpenseStore<S>,
    settings: &Settings,
    cmd: BudgetCommands,
    today: NaiveDate,
) -> ExpenseResult<()> {
    match cmd {
        BudgetCommands::Set { amount, month } => {
            let month = parse_month_arg(month.as_deref(), today)?;
            let budget = parse_budget_input(&amount);
            store.set_budget(month, budget)?;

            println!(
                "Budget for {} set to {}",
                month.label(),
                budget.format_with_symbol(&settings.currency_symbol)
            );
        }

        BudgetCommands::Show { month } => {
            let month = parse_month_arg(month.as_deref(), today)?;
            let summary = MonthlySummary::compute(
                store.expenses(),
                month,
                store.budget_for(month),
                settings.top_category_count,
                settings.warning_threshold,
            );
            print!(
                "{}",
                format_budget_card(&summary, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
