//! Help dialog
//!
//! Shows the keyboard shortcuts of the calendar and its dialogs

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Calendar"),
        Line::from(""),
        key_line("h/l ←/→", "Previous/next day"),
        key_line("k/j ↑/↓", "Previous/next week"),
        key_line("[/] p/n", "Previous/next month"),
        key_line("t", "Jump to today"),
        key_line("m", "Pick a month and year"),
        key_line("Enter", "Open the selected day"),
        key_line("b", "Set this month's budget"),
        key_line("?", "Show/hide help"),
        key_line("q", "Quit"),
        Line::from(""),
        section("Day"),
        Line::from(""),
        key_line("j/k", "Select expense"),
        key_line("a", "Add an expense"),
        key_line("d", "Delete selected expense"),
        key_line("Esc", "Close"),
        Line::from(""),
        section("Add Expense"),
        Line::from(""),
        key_line("Tab", "Next field"),
        key_line("←/→", "Choose category"),
        key_line("Enter", "Save expense"),
        key_line("Esc", "Back to list"),
        Line::from(""),
        section("Go to Month"),
        Line::from(""),
        key_line("Tab ←/→", "Switch month/year list"),
        key_line("j/k ↑/↓", "Move highlight"),
        key_line("Enter", "Go to month"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
