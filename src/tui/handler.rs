//! Event handler for the TUI
//!
//! Routes keyboard events to the calendar or to the open dialog.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;
use crate::storage::KeyValueStore;

/// Handle an incoming event
pub fn handle_event<S: KeyValueStore>(app: &mut App<S>, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(_) | Event::Resize(_, _) | Event::Tick => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) -> Result<()> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    handle_calendar_key(app, key);
    Ok(())
}

/// Handle keys on the calendar
fn handle_calendar_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        // Day movement
        KeyCode::Char('h') | KeyCode::Left => app.move_selection(-1),
        KeyCode::Char('l') | KeyCode::Right => app.move_selection(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_selection(-7),
        KeyCode::Char('j') | KeyCode::Down => app.move_selection(7),

        // Month movement
        KeyCode::Char('[') | KeyCode::Char('p') | KeyCode::PageUp => app.prev_month(),
        KeyCode::Char(']') | KeyCode::Char('n') | KeyCode::PageDown => app.next_month(),
        KeyCode::Char('t') | KeyCode::Home => app.go_to_today(),
        KeyCode::Char('m') => app.open_dialog(ActiveDialog::MonthPicker),

        KeyCode::Enter => app.open_dialog(ActiveDialog::Day),
        KeyCode::Char('b') => app.open_dialog(ActiveDialog::Budget),

        _ => {}
    }
}

/// Handle keys when a dialog is active
fn handle_dialog_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => {
            // Close help on any key
            app.close_dialog();
        }
        ActiveDialog::Day => {
            dialogs::day::handle_key(app, key);
        }
        ActiveDialog::Budget => {
            dialogs::budget::handle_key(app, key);
        }
        ActiveDialog::MonthPicker => {
            dialogs::month_picker::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::MonthKey;
    use crate::services::store::ExpenseStore;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn new_app(settings: &Settings) -> App<'_, MemoryStore> {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        App::new(ExpenseStore::load(MemoryStore::new()), settings, today)
    }

    #[test]
    fn test_navigation_keys() {
        let settings = Settings::default();
        let mut app = new_app(&settings);

        handle_event(&mut app, key(KeyCode::Char(']'))).unwrap();
        assert_eq!(app.month(), MonthKey::from_month_number(2024, 4));

        handle_event(&mut app, key(KeyCode::Char('p'))).unwrap();
        handle_event(&mut app, key(KeyCode::Char('p'))).unwrap();
        assert_eq!(app.month(), MonthKey::from_month_number(2024, 2));

        handle_event(&mut app, key(KeyCode::Char('t'))).unwrap();
        assert_eq!(app.selected_date(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());

        handle_event(&mut app, key(KeyCode::Char('l'))).unwrap();
        handle_event(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.selected_date(), NaiveDate::from_ymd_opt(2024, 3, 23).unwrap());
    }

    #[test]
    fn test_dialog_keys() {
        let settings = Settings::default();
        let mut app = new_app(&settings);

        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::Day);

        // calendar keys do not leak through an open dialog
        handle_event(&mut app, key(KeyCode::Char(']'))).unwrap();
        assert_eq!(app.month(), MonthKey::from_month_number(2024, 3));

        handle_event(&mut app, key(KeyCode::Esc)).unwrap();
        handle_event(&mut app, key(KeyCode::Char('?'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::Help);

        handle_event(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert!(!app.has_dialog());

        handle_event(&mut app, key(KeyCode::Char('b'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::Budget);
    }

    #[test]
    fn test_month_picker_keys() {
        let settings = Settings::default();
        let mut app = new_app(&settings);

        handle_event(&mut app, key(KeyCode::Char('m'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::MonthPicker);

        // July, then one year back
        for _ in 0..4 {
            handle_event(&mut app, key(KeyCode::Down)).unwrap();
        }
        handle_event(&mut app, key(KeyCode::Tab)).unwrap();
        handle_event(&mut app, key(KeyCode::Up)).unwrap();
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();

        assert!(!app.has_dialog());
        assert_eq!(app.month(), MonthKey::from_month_number(2023, 7));
        assert_eq!(app.selected_date(), NaiveDate::from_ymd_opt(2023, 7, 15).unwrap());
    }

    #[test]
    fn test_quit() {
        let settings = Settings::default();
        let mut app = new_app(&settings);
        handle_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);

        let mut app = new_app(&settings);
        app.open_dialog(ActiveDialog::Day);
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }
}
