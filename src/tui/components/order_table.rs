//! Order table with inline expansion rows.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::format::{formatar_quantidade, formatar_valor};
use crate::models::Pedido;
use crate::tui::app::App;

const KEY_HINTS: &str =
    " n:novo  e:editar  d:excluir  enter:produtos  r:recarregar  q:sair ";

/// Renders the order table. Expanded orders get extra rows underneath:
/// a loading marker while the line items fetch, then one row per item.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Pedidos ")
        .title_bottom(Line::from(KEY_HINTS).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.list.pedidos().is_empty() {
        let message = if app.list.carregando() {
            "Carregando pedidos..."
        } else {
            "Nenhum pedido encontrado. Pressione 'n' para criar o primeiro."
        };
        let para = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(para, area);
        return;
    }

    let header = Row::new(vec![
        "ID",
        "Comprador",
        "Fornecedor",
        "Qtd",
        "Valor total",
    ])
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let mut rows: Vec<Row> = Vec::new();
    for (index, pedido) in app.list.pedidos().iter().enumerate() {
        rows.push(pedido_row(pedido, index == app.selected));
        if let Some(id) = pedido.id
            && let Some(expansion) = app.list.expansion(id)
        {
            if expansion.loading {
                rows.push(detail_row("Carregando produtos...", "", ""));
            } else if let Some(produtos) = expansion.produtos.as_ref() {
                if produtos.is_empty() {
                    rows.push(detail_row("(sem produtos)", "", ""));
                }
                for produto in produtos {
                    rows.push(detail_row(
                        &produto.nome_produto,
                        &formatar_quantidade(produto.quantidade_comprada),
                        &formatar_valor(produto.valor_total_produto),
                    ));
                }
            }
        }
    }

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Length(8),
            Constraint::Length(16),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}

/// Main row for one pedido.
fn pedido_row(pedido: &Pedido, selected: bool) -> Row<'_> {
    let valor = pedido
        .valor_total_comprado
        .map(formatar_valor)
        .unwrap_or_else(|| "--".to_string());
    let quantidade = pedido
        .total_produtos_comprados
        .map(formatar_quantidade)
        .unwrap_or_else(|| "--".to_string());
    let id = pedido
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "--".to_string());

    let style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    Row::new(vec![
        Cell::from(id),
        Cell::from(pedido.nome_comprador.clone()),
        Cell::from(pedido.nome_fornecedor.clone()),
        Cell::from(quantidade),
        Cell::from(valor),
    ])
    .style(style)
}

/// Indented detail row shown under an expanded pedido.
fn detail_row<'a>(nome: &str, quantidade: &str, valor: &str) -> Row<'a> {
    Row::new(vec![
        Cell::from(""),
        Cell::from(format!("  └ {nome}")),
        Cell::from(""),
        Cell::from(quantidade.to_string()),
        Cell::from(valor.to_string()),
    ])
    .style(Style::default().fg(Color::DarkGray))
}
