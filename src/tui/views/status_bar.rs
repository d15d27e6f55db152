//! Status bar view
//!
//! Shows the selected date, its total, any status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::Money;
use crate::storage::KeyValueStore;
use crate::tui::app::App;

/// Render the status bar
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let date = app.selected_date();
    let day_total: Money = app.selected_expenses().iter().map(|e| e.amount).sum();

    let mut spans = vec![
        Span::styled(
            format!(" {} ", date.format("%a %b %-d, %Y")),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled(
            day_total.format_with_symbol(&app.settings.currency_symbol),
            Style::default().fg(Color::Green),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = " Enter:Day  b:Budget  m:Month  t:Today  ?:Help  q:Quit ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
