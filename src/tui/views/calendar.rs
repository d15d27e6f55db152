//! Calendar view
//!
//! Draws the month grid. The selected day has a highlighted border, today
//! is marked in yellow, and days with expenses show their total and the
//! first few names.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::services::calendar::{CalendarCell, DayCell, WEEKDAY_HEADERS};
use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::layout::{week_columns, CalendarLayout};

/// Render the calendar
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .title(" Expense Calendar ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let grid = app.grid();
    let weeks = grid.weeks();
    let layout = CalendarLayout::new(inner, weeks.len());

    let header = Line::from(vec![
        Span::styled("◀ [ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            grid.month().label(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ] ▶", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(
        Paragraph::new(header).alignment(Alignment::Center),
        layout.header,
    );

    for (name, column) in WEEKDAY_HEADERS.iter().zip(week_columns(layout.weekdays)) {
        frame.render_widget(
            Paragraph::new(*name)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            column,
        );
    }

    let selected = app.selected_date();
    for (week, row) in weeks.iter().zip(layout.weeks.iter()) {
        for (cell, column) in week.iter().zip(week_columns(*row)) {
            if let CalendarCell::Day(day) = cell {
                render_day(frame, app, day, day.date == selected, column);
            }
        }
    }
}

fn render_day<S: KeyValueStore>(
    frame: &mut Frame,
    app: &App<S>,
    day: &DayCell,
    selected: bool,
    area: Rect,
) {
    let border_style = if selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if day.has_expenses() {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let number_style = if day.is_today {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(format!("{}", day.day), number_style));

    let mut lines = Vec::new();
    if day.has_expenses() {
        lines.push(Line::from(Span::styled(
            day.total.format_with_symbol(&app.settings.currency_symbol),
            Style::default().fg(Color::Green),
        )));

        let (names, more) = day.preview(app.settings.max_names_per_day);
        for name in names {
            lines.push(Line::from(Span::styled(
                name.to_string(),
                Style::default().fg(Color::Gray),
            )));
        }
        if more > 0 {
            lines.push(Line::from(Span::styled(
                format!("+{} more", more),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
