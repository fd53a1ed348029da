//! Modal order form dialog.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::form::{Field, FormMode, FormState, LineItemDraft, OrderForm};
use crate::format::{formatar_quantidade, formatar_valor};
use crate::tui::app::{App, FormFocus, ItemField};

use super::centered_rect;

const DIALOG_WIDTH: u16 = 72;

const FORM_HINTS: &str =
    " enter:salvar  esc:cancelar  tab:campo  ctrl+n:+produto  ctrl+d:-produto ";

/// Renders the form dialog centered over the list.
pub fn render(frame: &mut Frame, app: &App) {
    let Some(form) = app.form.as_ref() else {
        return;
    };

    let title = match form.mode() {
        FormMode::Create => " Novo Pedido ",
        FormMode::Edit => " Editar Pedido ",
    };

    // Two header fields, a blank, the item header, one line per item,
    // a blank and the totals line.
    let content_height = 6 + form.itens.len() as u16;
    let area = centered_rect(DIALOG_WIDTH, content_height + 2, frame.area());

    let block = Block::default()
        .title(title)
        .title_bottom(Line::from(FORM_HINTS).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor: Option<(u16, u16)> = None;

    // Buyer / supplier fields.
    for (focus, label, field) in [
        (FormFocus::Comprador, "Comprador:  ", &form.nome_comprador),
        (FormFocus::Fornecedor, "Fornecedor: ", &form.nome_fornecedor),
    ] {
        let focused = app.form_focus == focus;
        let (line, offset) = field_line(app, label, field, focused, field_invalid_name(field));
        if let Some(x) = offset {
            cursor = Some((inner.x + x, inner.y + lines.len() as u16));
        }
        lines.push(line);
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Produtos:",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    for (index, draft) in form.itens.drafts().iter().enumerate() {
        let (line, offset) = item_line(app, index, draft);
        if let Some(x) = offset {
            cursor = Some((inner.x + x, inner.y + lines.len() as u16));
        }
        lines.push(line);
    }

    lines.push(Line::raw(""));
    lines.push(totals_line(form));

    frame.render_widget(Paragraph::new(lines), inner);

    // Only show the text cursor while the form accepts edits.
    if form.state() == FormState::Editable
        && let Some(position) = cursor
    {
        frame.set_cursor_position(position);
    }
}

/// Builds the line for a top-level text field. Returns the cursor column
/// relative to the dialog interior when the field is focused.
fn field_line<'a>(
    app: &App,
    label: &'a str,
    field: &'a Field,
    focused: bool,
    invalid: bool,
) -> (Line<'a>, Option<u16>) {
    let value = if focused {
        app.editor.text()
    } else {
        field.value()
    };

    let line = Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Cyan)),
        Span::styled(value.to_string(), value_style(focused, invalid)),
    ]);

    let offset = focused.then(|| (label.width() + editor_prefix_width(app)) as u16);
    (line, offset)
}

/// Builds the line for one line-item row with its three fields.
fn item_line<'a>(app: &App, index: usize, draft: &'a LineItemDraft) -> (Line<'a>, Option<u16>) {
    let focus_on = |field: ItemField| {
        app.form_focus
            == FormFocus::Item {
                index,
                field,
            }
    };

    let mut spans: Vec<Span> = vec![Span::styled(
        format!(" {:>2}. ", index + 1),
        Style::default().fg(Color::DarkGray),
    )];
    let mut offset = None;
    let mut column = spans[0].content.width();

    let parts: [(&str, &Field, ItemField, bool); 3] = [
        ("", &draft.nome_produto, ItemField::Nome, !draft.nome_valido()),
        (
            "  Qtd: ",
            &draft.quantidade,
            ItemField::Quantidade,
            !draft.quantidade_valida(),
        ),
        (
            "  Valor: ",
            &draft.valor,
            ItemField::Valor,
            !draft.valor_valido(),
        ),
    ];

    for (label, field, item_field, field_invalid) in parts {
        let focused = focus_on(item_field);
        let value = if focused {
            app.editor.text().to_string()
        } else {
            field.value().to_string()
        };
        let invalid = field_invalid && (field.is_touched() || focused);

        spans.push(Span::styled(label, Style::default().fg(Color::DarkGray)));
        column += label.width();
        if focused {
            offset = Some((column + editor_prefix_width(app)) as u16);
        }
        column += value.width();
        spans.push(Span::styled(value, value_style(focused, invalid)));
    }

    (Line::from(spans), offset)
}

/// Derived totals footer.
fn totals_line(form: &OrderForm) -> Line<'_> {
    let mut spans = vec![
        Span::styled("Valor total: ", Style::default().fg(Color::Cyan)),
        Span::styled(
            formatar_valor(form.itens.total_value()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Total de produtos: ", Style::default().fg(Color::Cyan)),
        Span::styled(
            formatar_quantidade(form.itens.total_quantity()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];

    if form.state() == FormState::Submitting {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            "Salvando...",
            Style::default().fg(Color::Yellow),
        ));
    }

    Line::from(spans)
}

/// Width of the editor content before the cursor, for cursor placement.
fn editor_prefix_width(app: &App) -> usize {
    app.editor.before_cursor().width()
}

fn value_style(focused: bool, invalid: bool) -> Style {
    let mut style = if invalid {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    };
    if focused {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}

/// Name fields only flag as invalid once touched.
fn field_invalid_name(field: &Field) -> bool {
    field.is_touched() && field.value().trim().chars().count() < 2
}
