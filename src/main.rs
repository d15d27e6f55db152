use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use expense_calendar::cli::{
    handle_add, handle_budget_command, handle_calendar, handle_categories, handle_delete,
    handle_list, handle_show, handle_summary, AddArgs, BudgetCommands,
};
use expense_calendar::config::{paths::ExpensePaths, settings::Settings};
use expense_calendar::services::ExpenseStore;
use expense_calendar::storage::open_file_store;

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Expense calendar with monthly budgets",
    long_about = "Record daily expenses on a calendar, set a budget for each month, \
                  and see where the money went from the command line or an \
                  interactive terminal calendar."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive calendar
    #[command(alias = "ui")]
    Tui,

    /// Record an expense
    Add(AddArgs),

    /// Show an expense by ID (or ID prefix)
    Show {
        /// Expense ID as shown by `list` (e.g., "exp-1a2b3c4d")
        id: String,
    },

    /// Delete an expense by ID (or ID prefix)
    #[command(alias = "rm")]
    Delete {
        /// Expense ID as shown by `list` (e.g., "exp-1a2b3c4d")
        id: String,
    },

    /// List expenses for a day or a month
    #[command(alias = "ls")]
    List {
        /// Show a single day (YYYY-MM-DD, "today", "yesterday")
        #[arg(short, long, conflicts_with = "month")]
        date: Option<String>,
        /// Month (e.g., "2024-03", "current", "prev", "next")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show a month as a calendar
    #[command(alias = "cal")]
    Calendar {
        /// Month (e.g., "2024-03", "current", "prev", "next")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show budget, total and top categories for a month
    Summary {
        /// Month (e.g., "2024-03", "current", "prev", "next")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// List the expense categories
    Categories,

    /// Show current configuration and paths
    Config,
}

/// Set up logging
///
/// Commands log to stderr. The TUI owns the terminal, so it logs to a file
/// in the base directory instead.
fn init_tracing(paths: &ExpensePaths, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        paths.ensure_directories()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(paths.log_file())?;
        registry
            .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .init();
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths, logging and settings
    let paths = ExpensePaths::new()?;
    init_tracing(&paths, matches!(cli.command, Some(Commands::Tui)))?;
    let settings = Settings::load_or_create(&paths)?;

    // Load the expense store
    let mut store = ExpenseStore::load(open_file_store(&paths));
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Tui) => {
            expense_calendar::tui::run_tui(store, &settings)?;
        }
        Some(Commands::Add(args)) => {
            handle_add(&mut store, &settings, args, today)?;
        }
        Some(Commands::Show { id }) => {
            handle_show(&store, &settings, &id)?;
        }
        Some(Commands::Delete { id }) => {
            handle_delete(&mut store, &settings, &id)?;
        }
        Some(Commands::List { date, month }) => {
            handle_list(&store, &settings, date.as_deref(), month.as_deref(), today)?;
        }
        Some(Commands::Calendar { month }) => {
            handle_calendar(&store, &settings, month.as_deref(), today)?;
        }
        Some(Commands::Summary { month }) => {
            handle_summary(&store, &settings, month.as_deref(), today)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut store, &settings, cmd, today)?;
        }
        Some(Commands::Categories) => handle_categories(),
        Some(Commands::Config) => {
            println!("Expense Calendar Configuration");
            println!("==============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Log file (TUI):  {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Top categories:     {}", settings.top_category_count);
            println!("  Warning threshold:  {}%", settings.warning_threshold);
            println!("  Names per day:      {}", settings.max_names_per_day);
        }
        None => {
            println!("Expense Calendar - daily expenses and monthly budgets");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense tui' to launch the interactive calendar.");
        }
    }

    Ok(())
}
