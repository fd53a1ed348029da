//! Main UI rendering coordinator.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use super::app::{App, Mode};
use super::components::{confirm, form_dialog, order_table, status_bar};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Order table
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    order_table::render(frame, layout[0], app);
    status_bar::render(frame, layout[1], app);

    match app.mode() {
        Mode::Form => form_dialog::render(frame, app),
        Mode::ConfirmDelete => confirm::render(frame, app),
        Mode::List => {}
    }
}
