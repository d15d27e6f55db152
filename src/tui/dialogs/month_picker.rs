//! Month picker dialog
//!
//! Jumps the calendar to a month and year chosen from two lists. The year
//! list spans five years either side of the current year.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::MONTH_NAMES;
use crate::services::navigation::{year_options, MonthCursor};
use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Which list has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerColumn {
    #[default]
    Month,
    Year,
}

/// State for the month picker
#[derive(Debug, Clone, Default)]
pub struct MonthPickerState {
    /// Highlighted zero-based month
    pub month_index: u32,
    /// Selectable years
    pub years: Vec<i32>,
    /// Highlighted position in `years`
    pub year_index: usize,
    pub focus: PickerColumn,
}

impl MonthPickerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlight the viewed month
    ///
    /// A viewed year outside the offered range highlights the nearest end.
    pub fn init(&mut self, cursor: &MonthCursor, today: NaiveDate) {
        self.years = year_options(today);
        self.month_index = cursor.month_index();
        self.year_index = match self.years.iter().position(|y| *y == cursor.year()) {
            Some(i) => i,
            None if self.years.first().is_some_and(|first| cursor.year() < *first) => 0,
            None => self.years.len().saturating_sub(1),
        };
        self.focus = PickerColumn::Month;
    }

    /// Highlighted year
    pub fn year(&self) -> Option<i32> {
        self.years.get(self.year_index).copied()
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PickerColumn::Month => PickerColumn::Year,
            PickerColumn::Year => PickerColumn::Month,
        };
    }

    fn move_up(&mut self) {
        match self.focus {
            PickerColumn::Month => self.month_index = (self.month_index + 11) % 12,
            PickerColumn::Year => self.year_index = self.year_index.saturating_sub(1),
        }
    }

    fn move_down(&mut self) {
        match self.focus {
            PickerColumn::Month => self.month_index = (self.month_index + 1) % 12,
            PickerColumn::Year => {
                if self.year_index + 1 < self.years.len() {
                    self.year_index += 1;
                }
            }
        }
    }
}

/// Render the month picker
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let area = centered_rect_fixed(36, 17, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Go to Month ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[0]);

    let state = &app.month_picker;

    let months = MONTH_NAMES.iter().map(|name| ListItem::new(*name));
    render_column(
        frame,
        months.collect(),
        state.month_index as usize,
        state.focus == PickerColumn::Month,
        columns[0],
    );

    let years = state.years.iter().map(|y| ListItem::new(y.to_string()));
    render_column(
        frame,
        years.collect(),
        state.year_index,
        state.focus == PickerColumn::Year,
        columns[1],
    );

    let instructions = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Switch  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Go  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(instructions), rows[1]);
}

fn render_column(frame: &mut Frame, items: Vec<ListItem>, selected: usize, focused: bool, area: Rect) {
    let highlight = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().bg(Color::DarkGray)
    };
    let list = List::new(items)
        .highlight_style(highlight)
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    list_state.select(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Handle key events for the month picker
pub fn handle_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_dialog();
            true
        }

        KeyCode::Enter => {
            let month_index = app.month_picker.month_index;
            if let Some(year) = app.month_picker.year() {
                app.go_to_month(year, month_index);
                app.set_status(format!("Viewing {}", app.month().label()));
            }
            app.close_dialog();
            true
        }

        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right | KeyCode::Char('h')
        | KeyCode::Char('l') => {
            app.month_picker.toggle_focus();
            true
        }

        KeyCode::Up | KeyCode::Char('k') => {
            app.month_picker.move_up();
            true
        }

        KeyCode::Down | KeyCode::Char('j') => {
            app.month_picker.move_down();
            true
        }

        _ => false,
    }
}
