//! Day dialog
//!
//! Lists the expenses of the selected day and hosts the add-expense form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::{Category, ExpenseForm};
use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// What the dialog is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayMode {
    #[default]
    List,
    Add,
}

/// Fields of the add form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Amount,
    Category,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            Self::Name => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Name => Self::Category,
            Self::Amount => Self::Name,
            Self::Category => Self::Amount,
        }
    }
}

/// State for the day dialog
#[derive(Debug, Clone, Default)]
pub struct DayDialogState {
    pub mode: DayMode,
    /// Highlighted expense in the list
    pub selected_index: usize,
    pub name: TextInput,
    pub amount: TextInput,
    /// Chosen category; `None` until the user picks one
    pub category: Option<Category>,
    pub focused: FormField,
    /// First problem of the last rejected submission
    pub error_message: Option<String>,
}

impl DayDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Switch to an empty add form
    pub fn start_add(&mut self) {
        self.mode = DayMode::Add;
        self.name.clear();
        self.amount.clear();
        self.category = None;
        self.focused = FormField::Name;
        self.error_message = None;
    }

    /// Step the category selector forward or back
    pub fn cycle_category(&mut self, forward: bool) {
        let count = Category::ALL.len();
        let current = self
            .category
            .as_ref()
            .and_then(|c| Category::ALL.iter().position(|a| a == c));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        };
        self.category = Some(Category::ALL[next].clone());
    }

    /// Name of the chosen category, empty if none
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(Category::name).unwrap_or("")
    }

    /// The raw form values
    pub fn form(&self) -> ExpenseForm {
        ExpenseForm::new(self.name.value(), self.amount.value(), self.category_name())
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused {
            FormField::Name => Some(&mut self.name),
            FormField::Amount => Some(&mut self.amount),
            FormField::Category => None,
        }
    }
}

/// Render the day dialog
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let area = centered_rect_fixed(60, 20, frame.area());
    frame.render_widget(Clear, area);

    let date = app.selected_date();
    let block = Block::default()
        .title(format!(" {} ", date.format("%A, %B %-d, %Y")))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.day_dialog.mode {
        DayMode::List => render_list(frame, app, inner),
        DayMode::Add => render_form(frame, app, inner),
    }
}

fn render_list<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: ratatui::layout::Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Expenses
            Constraint::Length(1), // Total
            Constraint::Length(1), // Instructions
        ])
        .split(area);

    let symbol = &app.settings.currency_symbol;
    let expenses = app.selected_expenses();

    if expenses.is_empty() {
        let empty = Paragraph::new("No expenses for this day")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, chunks[0]);
    } else {
        let items: Vec<ListItem> = expenses
            .iter()
            .map(|e| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(e.name.as_str(), Style::default().fg(Color::White)),
                        Span::raw("  "),
                        Span::styled(
                            e.amount.format_with_symbol(symbol),
                            Style::default().fg(Color::Green),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("  {}", e.category),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        state.select(Some(app.day_dialog.selected_index.min(expenses.len() - 1)));
        frame.render_stateful_widget(list, chunks[0], &mut state);
    }

    let total: crate::models::Money = expenses.iter().map(|e| e.amount).sum();
    let total_line = Line::from(vec![
        Span::styled("Total: ", Style::default().fg(Color::Yellow)),
        Span::styled(
            total.format_with_symbol(symbol),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(total_line), chunks[1]);

    let instructions = Line::from(vec![
        Span::styled("[a]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[d]", Style::default().fg(Color::Red)),
        Span::raw(" Delete  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Close"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[2]);
}

fn render_form<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: ratatui::layout::Rect) {
    let state = &app.day_dialog;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Name
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Min(0),
            Constraint::Length(1), // Instructions
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Add New Expense",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    let name = state
        .name
        .clone()
        .label("Name    ")
        .placeholder("e.g., Lunch, Gas, Groceries")
        .focused(state.focused == FormField::Name);
    frame.render_widget(name, chunks[2]);

    let amount = state
        .amount
        .clone()
        .label(format!("Amount {}", app.settings.currency_symbol))
        .placeholder("0.00")
        .focused(state.focused == FormField::Amount);
    frame.render_widget(amount, chunks[3]);

    let category_focused = state.focused == FormField::Category;
    let category_text = match state.category {
        Some(_) => format!("< {} >", state.category_name()),
        None => "< Select a category >".to_string(),
    };
    let category_line = Line::from(vec![
        Span::styled("Category", Style::default().fg(Color::Cyan)),
        Span::raw(": "),
        Span::styled(
            category_text,
            if category_focused {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else if state.category.is_none() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            },
        ),
    ]);
    frame.render_widget(Paragraph::new(category_line), chunks[4]);

    if let Some(ref error) = state.error_message {
        let error_line = Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(error_line), chunks[6]);
    }

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Next field  "),
        Span::styled("[←/→]", Style::default().fg(Color::Cyan)),
        Span::raw(" Category  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Back"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[8]);
}

/// Handle key events for the day dialog
pub fn handle_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) -> bool {
    match app.day_dialog.mode {
        DayMode::List => handle_list_key(app, key),
        DayMode::Add => handle_form_key(app, key),
    }
}

fn handle_list_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) -> bool {
    let count = app.selected_expenses().len();

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_dialog();
            true
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.day_dialog.selected_index + 1 < count {
                app.day_dialog.selected_index += 1;
            }
            true
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.day_dialog.selected_index = app.day_dialog.selected_index.saturating_sub(1);
            true
        }
        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.day_dialog.start_add();
            true
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            delete_selected(app);
            true
        }
        _ => false,
    }
}

fn delete_selected<S: KeyValueStore>(app: &mut App<S>) {
    let Some(expense) = app
        .selected_expenses()
        .get(app.day_dialog.selected_index)
        .map(|e| (*e).clone())
    else {
        return;
    };

    match app.store.delete(&expense.id) {
        Ok(_) => {
            let remaining = app.selected_expenses().len();
            app.day_dialog.selected_index = app
                .day_dialog
                .selected_index
                .min(remaining.saturating_sub(1));
            app.set_status(format!("Deleted '{}'", expense.name));
        }
        Err(e) => app.set_status(format!("Delete failed: {}", e)),
    }
}

fn handle_form_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) -> bool {
    if key.code == KeyCode::Enter {
        submit(app);
        return true;
    }

    let state = &mut app.day_dialog;

    match key.code {
        KeyCode::Esc => {
            state.mode = DayMode::List;
            state.error_message = None;
            true
        }
        KeyCode::Tab | KeyCode::Down => {
            state.focused = state.focused.next();
            true
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focused = state.focused.prev();
            true
        }
        KeyCode::Left if state.focused == FormField::Category => {
            state.cycle_category(false);
            true
        }
        KeyCode::Right | KeyCode::Char(' ') if state.focused == FormField::Category => {
            state.cycle_category(true);
            true
        }
        KeyCode::Left => {
            if let Some(input) = state.focused_input() {
                input.move_left();
            }
            true
        }
        KeyCode::Right => {
            if let Some(input) = state.focused_input() {
                input.move_right();
            }
            true
        }
        KeyCode::Backspace => {
            if let Some(input) = state.focused_input() {
                input.backspace();
            }
            true
        }
        KeyCode::Char(c) => {
            if let Some(input) = state.focused_input() {
                input.insert(c);
                state.error_message = None;
            }
            true
        }
        _ => false,
    }
}

fn submit<S: KeyValueStore>(app: &mut App<S>) {
    let date = app.selected_date();
    let form = app.day_dialog.form();

    match app.store.submit(date, &form) {
        Ok(Some(expense)) => {
            app.set_status(format!(
                "Added '{}' ({})",
                expense.name,
                expense.amount.format_with_symbol(&app.settings.currency_symbol)
            ));
            app.day_dialog.reset();
            app.day_dialog.selected_index = app.selected_expenses().len().saturating_sub(1);
        }
        Ok(None) => {
            app.day_dialog.error_message = form.problems().first().map(|p| p.to_string());
        }
        Err(e) => {
            app.day_dialog.error_message = Some(e.to_string());
        }
    }
}
