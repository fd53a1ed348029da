//! Delete-confirmation dialog.

use ratatui::{
    Frame,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::tui::app::App;

use super::centered_rect;

/// Renders the confirmation prompt for a pending deletion.
pub fn render(frame: &mut Frame, app: &App) {
    let Some(pedido) = app.list.pending_delete() else {
        return;
    };
    let Some(id) = pedido.id else {
        return;
    };

    let area = centered_rect(56, 5, frame.area());
    let block = Block::default()
        .title(" Excluir Pedido ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let lines = vec![
        Line::raw(format!("Tem certeza que deseja excluir o pedido {id}?")),
        Line::raw(""),
        Line::styled(
            "s/enter: confirmar    n/esc: cancelar",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
