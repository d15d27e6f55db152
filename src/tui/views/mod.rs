//! TUI Views module
//!
//! Contains the calendar, the summary panel and the status bar.

pub mod calendar;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use crate::storage::KeyValueStore;

/// Render the entire application
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let layout = AppLayout::new(frame.area());

    calendar::render(frame, app, layout.calendar);
    summary::render(frame, app, layout.side_panel);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    match app.active_dialog {
        ActiveDialog::Day => dialogs::day::render(frame, app),
        ActiveDialog::Budget => dialogs::budget::render(frame, app),
        ActiveDialog::MonthPicker => dialogs::month_picker::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}
