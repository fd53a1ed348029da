//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::notice::NoticeKind;
use crate::tui::app::App;

/// Renders the status bar: loading indicator, latest notice, API endpoint.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let loading_span = if app.list.carregando() {
        Span::styled(" Carregando... ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            format!(" {} pedidos ", app.list.pedidos().len()),
            Style::default().fg(Color::Cyan),
        )
    };

    let notice_span = if let Some(ref display) = app.notice {
        let color = match display.notice.kind {
            NoticeKind::Info => Color::Green,
            NoticeKind::Error => Color::Red,
        };
        Span::styled(
            format!(" {} ", display.notice.message),
            Style::default().fg(color),
        )
    } else {
        Span::raw("")
    };

    let api_label = format!(" {} ", app.api_label);
    let spans = vec![
        loading_span,
        Span::raw("│"),
        notice_span,
        Span::styled(
            format!(
                "{:>width$}",
                api_label,
                width = area.width.saturating_sub(30) as usize
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
