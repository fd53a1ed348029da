//! Rendering components.

pub mod confirm;
pub mod form_dialog;
pub mod order_table;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Centers a `width` x `height` rectangle inside `area`, clamped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Fill(1),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width.min(area.width)),
            Constraint::Fill(1),
        ])
        .split(vertical[1]);
    horizontal[1]
}
