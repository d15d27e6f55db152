//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: calendar, summary panel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Calendar grid
    pub calendar: Rect,
    /// Summary cards on the right
    pub side_panel: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(56),    // Calendar
                Constraint::Length(36), // Side panel (fixed width)
            ])
            .split(vertical[0]);

        Self {
            calendar: horizontal[0],
            side_panel: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the summary side panel
pub struct SidePanelLayout {
    pub budget: Rect,
    pub total: Rect,
    pub categories: Rect,
}

impl SidePanelLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Budget card
                Constraint::Length(4), // Total card
                Constraint::Min(4),    // Top categories
            ])
            .split(area);

        Self {
            budget: chunks[0],
            total: chunks[1],
            categories: chunks[2],
        }
    }
}

/// Layout for the calendar view
pub struct CalendarLayout {
    /// Month title and navigation hint
    pub header: Rect,
    /// Weekday names
    pub weekdays: Rect,
    /// Week rows
    pub weeks: Vec<Rect>,
}

impl CalendarLayout {
    /// Split `area` into a header, weekday row and `week_count` equal rows
    pub fn new(area: Rect, week_count: usize) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(1), // Weekdays
                Constraint::Min(0),    // Weeks
            ])
            .split(area);

        let rows = week_count.max(1) as u32;
        let weeks = Layout::default()
            .direction(Direction::Vertical)
            .constraints((0..rows).map(|_| Constraint::Ratio(1, rows)))
            .split(chunks[2])
            .to_vec();

        Self {
            header: chunks[0],
            weekdays: chunks[1],
            weeks,
        }
    }
}

/// Split a row into seven equal day columns
pub fn week_columns(row: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..7).map(|_| Constraint::Ratio(1, 7)))
        .split(row)
        .to_vec()
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
