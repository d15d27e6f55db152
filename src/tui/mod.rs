//! Terminal User Interface module
//!
//! This module provides the interactive calendar using ratatui: a month
//! grid, a summary panel, and dialogs for a day's expenses and the monthly
//! budget.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
