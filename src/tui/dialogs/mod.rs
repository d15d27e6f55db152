//! Dialog modules for the TUI
//!
//! Contains modal dialogs for various operations

pub mod budget;
pub mod day;
pub mod help;
pub mod month_picker;
