//! Application state for the TUI
//!
//! The App struct owns the expense store and holds all state needed for
//! rendering and handling events.

use chrono::{Datelike, Duration, NaiveDate};
use tracing::debug;

use crate::config::settings::Settings;
use crate::models::{Expense, MonthKey};
use crate::services::aggregation::MonthlySummary;
use crate::services::calendar::{build_month_grid, CalendarGrid};
use crate::services::navigation::MonthCursor;
use crate::services::store::ExpenseStore;
use crate::storage::KeyValueStore;

use super::dialogs::budget::BudgetDialogState;
use super::dialogs::day::DayDialogState;
use super::dialogs::month_picker::MonthPickerState;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Expenses of the selected day
    Day,
    /// Budget of the viewed month
    Budget,
    /// Month and year selector
    MonthPicker,
    Help,
}

/// Main application state
pub struct App<'a, S: KeyValueStore> {
    /// The expense store
    pub store: ExpenseStore<S>,

    /// Application settings
    pub settings: &'a Settings,

    /// Real-world current date
    pub today: NaiveDate,

    /// Month being viewed
    pub cursor: MonthCursor,

    /// Selected day within the viewed month
    pub selected_day: u32,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Day dialog state
    pub day_dialog: DayDialogState,

    /// Budget dialog state
    pub budget_dialog: BudgetDialogState,

    /// Month picker state
    pub month_picker: MonthPickerState,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a, S: KeyValueStore> App<'a, S> {
    /// Create a new App viewing the month of `today`
    pub fn new(store: ExpenseStore<S>, settings: &'a Settings, today: NaiveDate) -> Self {
        Self {
            store,
            settings,
            today,
            cursor: MonthCursor::current(today),
            selected_day: today.day(),
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            day_dialog: DayDialogState::new(),
            budget_dialog: BudgetDialogState::new(),
            month_picker: MonthPickerState::new(),
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::Day => self.day_dialog.reset(),
            ActiveDialog::Budget => {
                let current = self.store.budget_for(self.month());
                self.budget_dialog.init(current);
            }
            ActiveDialog::MonthPicker => self.month_picker.init(&self.cursor, self.today),
            ActiveDialog::Help | ActiveDialog::None => {}
        }
        debug!(?dialog, "Opening dialog");
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Month being viewed
    pub fn month(&self) -> MonthKey {
        self.cursor.month()
    }

    /// The selected calendar date
    pub fn selected_date(&self) -> NaiveDate {
        let month = self.month();
        month
            .day(self.selected_day.min(month.days_in_month()))
            .unwrap_or_else(|| month.first_day())
    }

    /// Move the selection by `days`, following it into adjacent months
    pub fn move_selection(&mut self, days: i64) {
        if let Some(date) = self.selected_date().checked_add_signed(Duration::days(days)) {
            self.select_date(date);
        }
    }

    /// Select a date and view its month
    pub fn select_date(&mut self, date: NaiveDate) {
        self.cursor = MonthCursor::current(date);
        self.selected_day = date.day();
    }

    /// Go to the previous month, keeping the day where possible
    pub fn prev_month(&mut self) {
        self.cursor.prev();
        self.clamp_selected_day();
    }

    /// Go to the next month, keeping the day where possible
    pub fn next_month(&mut self) {
        self.cursor.next();
        self.clamp_selected_day();
    }

    /// View a zero-based month of `year`, keeping the day where possible
    pub fn go_to_month(&mut self, year: i32, month_index: u32) {
        self.cursor.set_year(year);
        self.cursor.set_month_index(month_index);
        self.clamp_selected_day();
    }

    /// Jump to today's date
    pub fn go_to_today(&mut self) {
        self.select_date(self.today);
    }

    /// Update the current date (the clock may pass midnight while running)
    pub fn refresh_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    fn clamp_selected_day(&mut self) {
        self.selected_day = self.selected_day.clamp(1, self.month().days_in_month());
    }

    /// Calendar grid of the viewed month
    pub fn grid(&self) -> CalendarGrid {
        build_month_grid(self.month(), self.store.expenses(), self.today)
    }

    /// Summary cards of the viewed month
    pub fn summary(&self) -> MonthlySummary {
        let month = self.month();
        MonthlySummary::compute(
            self.store.expenses(),
            month,
            self.store.budget_for(month),
            self.settings.top_category_count,
            self.settings.warning_threshold,
        )
    }

    /// Expenses recorded on the selected day
    pub fn selected_expenses(&self) -> Vec<&Expense> {
        self.store.expenses_on(self.selected_date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, NewExpense};
    use crate::storage::MemoryStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app(settings: &Settings, today: NaiveDate) -> App<'_, MemoryStore> {
        App::new(ExpenseStore::load(MemoryStore::new()), settings, today)
    }

    #[test]
    fn test_starts_on_today() {
        let settings = Settings::default();
        let app = app(&settings, date(2024, 3, 15));

        assert_eq!(app.month(), MonthKey::from_month_number(2024, 3));
        assert_eq!(app.selected_date(), date(2024, 3, 15));
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_month_change_clamps_day() {
        let settings = Settings::default();
        let mut app = app(&settings, date(2024, 1, 31));

        app.next_month();
        assert_eq!(app.selected_date(), date(2024, 2, 29));

        app.next_month();
        assert_eq!(app.month(), MonthKey::from_month_number(2024, 3));

        app.prev_month();
        app.prev_month();
        app.prev_month();
        assert_eq!(app.month(), MonthKey::from_month_number(2023, 12));
    }

    #[test]
    fn test_selection_crosses_month_boundary() {
        let settings = Settings::default();
        let mut app = app(&settings, date(2024, 3, 31));

        app.move_selection(1);
        assert_eq!(app.selected_date(), date(2024, 4, 1));
        assert_eq!(app.month(), MonthKey::from_month_number(2024, 4));

        app.move_selection(-7);
        assert_eq!(app.selected_date(), date(2024, 3, 25));

        app.next_month();
        app.go_to_today();
        assert_eq!(app.selected_date(), date(2024, 3, 31));
    }

    #[test]
    fn test_go_to_month() {
        let settings = Settings::default();
        let mut app = app(&settings, date(2024, 1, 31));

        app.go_to_month(2021, 1);
        assert_eq!(app.month(), MonthKey::from_month_number(2021, 2));
        assert_eq!(app.selected_date(), date(2021, 2, 28));

        app.go_to_month(2021, 40);
        assert_eq!(app.month(), MonthKey::from_month_number(2021, 12));
    }

    #[test]
    fn test_summary_and_selected_expenses() {
        let settings = Settings::default();
        let mut app = app(&settings, date(2024, 3, 15));
        app.store
            .add(NewExpense::new(
                date(2024, 3, 15),
                "Lunch",
                Money::from_cents(1250),
                Category::FoodAndDining,
            ))
            .unwrap();

        assert_eq!(app.selected_expenses().len(), 1);
        assert_eq!(app.summary().total.cents(), 1250);
        assert_eq!(app.grid().day(15).unwrap().total.cents(), 1250);
    }

    #[test]
    fn test_open_budget_dialog_prefills() {
        let settings = Settings::default();
        let mut app = app(&settings, date(2024, 3, 15));
        app.store
            .set_budget(app.month(), Money::from_cents(500_000))
            .unwrap();

        app.open_dialog(ActiveDialog::Budget);
        assert_eq!(app.active_dialog, ActiveDialog::Budget);
        assert_eq!(app.budget_dialog.input.value(), "5000.00");

        app.close_dialog();
        assert!(!app.has_dialog());
    }
}
