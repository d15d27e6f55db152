//! Summary panel view
//!
//! Budget card with a progress gauge, total-spent card, and the top
//! categories with bars relative to the largest one.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::display::summary::status_label;
use crate::services::aggregation::{BudgetStatus, MonthlySummary};
use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::layout::SidePanelLayout;

/// Colour of the budget gauge for a status
pub fn status_color(status: BudgetStatus) -> Color {
    match status {
        BudgetStatus::Over => Color::Red,
        BudgetStatus::Warning => Color::Yellow,
        BudgetStatus::OnTrack => Color::Green,
        BudgetStatus::Unset => Color::DarkGray,
    }
}

/// Render the summary panel
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let summary = app.summary();
    let symbol = app.settings.currency_symbol.as_str();
    let layout = SidePanelLayout::new(area);

    render_budget_card(frame, &summary, symbol, layout.budget);
    render_total_card(frame, &summary, symbol, layout.total);
    render_top_categories(frame, &summary, symbol, layout.categories);
}

fn card(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
}

fn render_budget_card(frame: &mut Frame, summary: &MonthlySummary, symbol: &str, area: Rect) {
    let block = card("Monthly Budget");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if summary.status == BudgetStatus::Unset {
        let lines = vec![
            Line::from(Span::styled(
                "No budget set",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(vec![
                Span::raw("Press "),
                Span::styled("b", Style::default().fg(Color::Cyan)),
                Span::raw(" to set one"),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Budget amount
            Constraint::Length(1), // Spent / remaining
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Status
            Constraint::Min(0),
        ])
        .split(inner);

    let color = status_color(summary.status);

    frame.render_widget(
        Paragraph::new(Span::styled(
            summary.budget.format_with_symbol(symbol),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    let remaining_style = if summary.is_over_budget() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(format!("Spent {}  ", summary.total.format_with_symbol(symbol))),
            Span::styled(summary.remaining_label(symbol), remaining_style),
        ])),
        chunks[1],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(summary.progress_fill() / 100.0)
        .label(format!("{:.1}%", summary.progress));
    frame.render_widget(gauge, chunks[2]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            status_label(summary.status),
            Style::default().fg(color),
        )),
        chunks[3],
    );
}

fn render_total_card(frame: &mut Frame, summary: &MonthlySummary, symbol: &str, area: Rect) {
    let noun = if summary.expense_count == 1 {
        "expense"
    } else {
        "expenses"
    };
    let lines = vec![
        Line::from(Span::styled(
            summary.total.format_with_symbol(symbol),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} {} recorded", summary.expense_count, noun),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(card("Total Spent")), area);
}

fn render_top_categories(frame: &mut Frame, summary: &MonthlySummary, symbol: &str, area: Rect) {
    let block = card("Top Categories");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if summary.top_categories.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No expenses this month",
                Style::default().fg(Color::DarkGray),
            )),
            inner,
        );
        return;
    }

    let bar_width = inner.width as usize;
    let mut lines = Vec::new();
    for ranked in &summary.top_categories {
        let amount = ranked.amount.format_with_symbol(symbol);
        let name_width = bar_width.saturating_sub(amount.chars().count() + 1);
        lines.push(Line::from(vec![
            Span::raw(format!(
                "{:<width$} ",
                crate::display::calendar::truncate(ranked.category.name(), name_width),
                width = name_width
            )),
            Span::styled(amount, Style::default().fg(Color::Green)),
        ]));

        let filled = ((ranked.share_of_max / 100.0) * bar_width as f64).round() as usize;
        lines.push(Line::from(vec![
            Span::styled("█".repeat(filled), Style::default().fg(Color::Cyan)),
            Span::styled(
                "░".repeat(bar_width.saturating_sub(filled)),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
