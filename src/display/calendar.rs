//! Calendar grid display
//!
//! Renders a `CalendarGrid` as a fixed-width text calendar. Each day shows
//! its number (with `*` for today), the day total, and the first few
//! expense names followed by a "+N more" marker.

use crate::services::calendar::{CalendarCell, CalendarGrid, WEEKDAY_HEADERS};

/// Width of one calendar column, excluding the separator
pub const CELL_WIDTH: usize = 12;

/// Format a month grid as text
pub fn format_calendar(grid: &CalendarGrid, currency_symbol: &str, max_names: usize) -> String {
    let mut output = String::new();

    let title = grid.month().label();
    let full_width = CELL_WIDTH * 7 + 6;
    output.push_str(&format!("{:^width$}\n", title, width = full_width));

    let headers: Vec<String> = WEEKDAY_HEADERS
        .iter()
        .map(|h| format!("{:<width$}", h, width = CELL_WIDTH))
        .collect();
    output.push_str(headers.join(" ").trim_end());
    output.push('\n');
    output.push_str(&"-".repeat(full_width));
    output.push('\n');

    for week in grid.weeks() {
        let columns: Vec<Vec<String>> = week
            .iter()
            .map(|cell| cell_lines(cell, currency_symbol, max_names))
            .collect();
        let height = columns.iter().map(Vec::len).max().unwrap_or(1);

        for row in 0..height {
            let line: Vec<String> = columns
                .iter()
                .map(|lines| {
                    let text = lines.get(row).map(String::as_str).unwrap_or("");
                    format!("{:<width$}", truncate(text, CELL_WIDTH), width = CELL_WIDTH)
                })
                .collect();
            output.push_str(line.join(" ").trim_end());
            output.push('\n');
        }
        output.push('\n');
    }

    output
}

fn cell_lines(cell: &CalendarCell, currency_symbol: &str, max_names: usize) -> Vec<String> {
    let Some(day) = cell.as_day() else {
        return Vec::new();
    };

    let marker = if day.is_today { "*" } else { "" };
    let mut lines = vec![format!("{}{}", day.day, marker)];

    if day.has_expenses() {
        lines.push(day.total.format_with_symbol(currency_symbol));
        let (names, more) = day.preview(max_names);
        lines.extend(names.into_iter().map(|n| format!("- {}", n)));
        if more > 0 {
            lines.push(format!("+{} more", more));
        }
    }

    lines
}

/// Cut `text` to at most `width` characters, ending in `~` when shortened
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('~');
    cut
}
