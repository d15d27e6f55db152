//! Budget dialog
//!
//! Sets the spending budget of the viewed month.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{parse_budget_input, Money};
use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// State for the budget dialog
#[derive(Debug, Clone, Default)]
pub struct BudgetDialogState {
    /// Budget when the dialog was opened
    pub current_amount: Money,
    pub input: TextInput,
}

impl BudgetDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize the dialog, pre-filling a non-zero budget
    pub fn init(&mut self, current_amount: Money) {
        self.current_amount = current_amount;
        let text = if current_amount.is_zero() {
            String::new()
        } else {
            format!("{:.2}", current_amount.as_decimal())
        };
        self.input = TextInput::new().content(text);
    }

    /// Amount that Enter would save
    pub fn parsed(&self) -> Money {
        parse_budget_input(self.input.value())
    }
}

/// Render the budget dialog
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let area = centered_rect_fixed(50, 10, frame.area());
    frame.render_widget(Clear, area);

    let state = &app.budget_dialog;
    let symbol = &app.settings.currency_symbol;

    let block = Block::default()
        .title(" Set Monthly Budget ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Month
            Constraint::Length(1), // Current
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Input
            Constraint::Min(0),
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    let month_line = Line::from(vec![
        Span::styled("Month:   ", Style::default().fg(Color::Yellow)),
        Span::raw(app.month().label()),
    ]);
    frame.render_widget(Paragraph::new(month_line), chunks[0]);

    let current_line = Line::from(vec![
        Span::styled("Current: ", Style::default().fg(Color::Yellow)),
        Span::raw(state.current_amount.format_with_symbol(symbol)),
    ]);
    frame.render_widget(Paragraph::new(current_line), chunks[1]);

    let input = state
        .input
        .clone()
        .label(format!("Budget {}", symbol))
        .placeholder("0.00")
        .focused(true);
    frame.render_widget(input, chunks[3]);

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel  "),
        Span::styled("[Ctrl+U]", Style::default().fg(Color::Cyan)),
        Span::raw(" Clear"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[5]);
}

/// Handle key events for the budget dialog
pub fn handle_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }

        KeyCode::Enter => {
            let month = app.month();
            let amount = app.budget_dialog.parsed();
            match app.store.set_budget(month, amount) {
                Ok(()) => {
                    app.set_status(format!(
                        "Budget for {} set to {}",
                        month.label(),
                        amount.format_with_symbol(&app.settings.currency_symbol)
                    ));
                    app.close_dialog();
                }
                Err(e) => app.set_status(format!("Saving budget failed: {}", e)),
            }
            true
        }

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.budget_dialog.input.clear();
            true
        }

        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == ',' => {
            app.budget_dialog.input.insert(c);
            true
        }

        KeyCode::Backspace => {
            app.budget_dialog.input.backspace();
            true
        }

        KeyCode::Left => {
            app.budget_dialog.input.move_left();
            true
        }

        KeyCode::Right => {
            app.budget_dialog.input.move_right();
            true
        }

        _ => false,
    }
}
