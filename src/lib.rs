//! Expense Calendar - Terminal expense tracker with a monthly calendar
//!
//! This library provides the core functionality for the expense calendar:
//! recording daily expenses, laying a month out as a calendar grid, and
//! tracking spend against a per-month budget.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, categories, months)
//! - `storage`: Key-value persistence adapters
//! - `services`: Expense store, calendar grid, aggregation, navigation
//! - `display`: Text formatting shared by the CLI and TUI
//! - `cli`: Command-line handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_calendar::config::{paths::ExpensePaths, settings::Settings};
//! use expense_calendar::services::ExpenseStore;
//! use expense_calendar::storage::open_file_store;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = ExpenseStore::load(open_file_store(&paths));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
