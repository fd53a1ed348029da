//! Behavioral tests for the order list controller: load, expansion,
//! deletion and form-close handling.

use rust_decimal_macros::dec;

use balcao::BalcaoError;
use balcao::form::{FormMode, FormOutcome};
use balcao::list::{ListCommand, OrderList};
use balcao::models::{Pedido, ProdutoPedido};
use balcao::notice::NoticeKind;

fn pedido(id: i64, comprador: &str) -> Pedido {
    Pedido {
        id: Some(id),
        nome_comprador: comprador.to_string(),
        nome_fornecedor: "Papelaria Central".to_string(),
        valor_total_comprado: Some(dec!(450.50)),
        total_produtos_comprados: Some(dec!(6)),
        produtos: None,
    }
}

fn produtos() -> Vec<ProdutoPedido> {
    vec![ProdutoPedido {
        id: Some(11),
        nome_produto: "Caneta Azul".to_string(),
        quantidade_comprada: dec!(2),
        valor_total_produto: dec!(150.00),
    }]
}

/// Extracts the generation of the LoadLineItems command.
fn generation_of(command: &ListCommand) -> u64 {
    match command {
        ListCommand::LoadLineItems { generation, .. } => *generation,
        other => panic!("Expected LoadLineItems, got {other:?}"),
    }
}

#[test]
fn load_success_replaces_the_collection() {
    let mut list = OrderList::new();
    assert_eq!(list.load(), ListCommand::LoadOrders);
    assert!(list.carregando());

    list.resolve_load(Ok(vec![pedido(1, "Maria Silva"), pedido(2, "Carlos Souza")]));

    assert!(!list.carregando());
    assert_eq!(list.pedidos().len(), 2);
    assert!(list.take_notices().is_empty());
}

#[test]
fn load_failure_keeps_the_collection_and_fires_one_notice() {
    let mut list = OrderList::new();
    list.load();
    list.resolve_load(Ok(vec![pedido(1, "Maria Silva")]));

    list.load();
    list.resolve_load(Err(BalcaoError::Network("connection refused".into())));

    assert!(!list.carregando());
    assert_eq!(list.pedidos().len(), 1);
    let notices = list.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Error);
    assert_eq!(
        notices[0].message,
        "Erro ao carregar pedidos: Falha de rede: connection refused"
    );
}

#[test]
fn reload_prunes_expansions_for_vanished_orders() {
    let mut list = OrderList::new();
    list.load();
    list.resolve_load(Ok(vec![pedido(1, "Maria Silva"), pedido(2, "Carlos Souza")]));

    list.toggle_expansion(1);
    list.toggle_expansion(2);

    list.load();
    list.resolve_load(Ok(vec![pedido(2, "Carlos Souza")]));

    assert!(!list.is_expanded(1));
    assert!(list.is_expanded(2));
}

#[test]
fn expand_requests_line_items_and_caches_the_result() {
    let mut list = OrderList::new();
    list.load();
    list.resolve_load(Ok(vec![pedido(1, "Maria Silva")]));

    let command = list.toggle_expansion(1).expect("Expected a fetch command");
    let generation = generation_of(&command);
    assert!(list.is_expanded(1));
    assert!(list.expansion(1).unwrap().loading);

    list.resolve_line_items(1, generation, Ok(produtos()));

    let expansion = list.expansion(1).unwrap();
    assert!(!expansion.loading);
    let cached = expansion.produtos.as_ref().unwrap();
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].nome_produto, "Caneta Azul");
}

#[test]
fn collapse_discards_the_in_flight_response() {
    let mut list = OrderList::new();
    list.load();
    list.resolve_load(Ok(vec![pedido(1, "Maria Silva")]));

    let command = list.toggle_expansion(1).unwrap();
    let generation = generation_of(&command);

    // Collapse before the response lands.
    assert!(list.toggle_expansion(1).is_none());
    assert!(!list.is_expanded(1));

    list.resolve_line_items(1, generation, Ok(produtos()));

    assert!(!list.is_expanded(1));
    assert!(list.take_notices().is_empty());
}

#[test]
fn stale_response_after_re_expand_is_ignored() {
    let mut list = OrderList::new();
    list.load();
    list.resolve_load(Ok(vec![pedido(1, "Maria Silva")]));

    let first = generation_of(&list.toggle_expansion(1).unwrap());
    list.toggle_expansion(1);
    let second = generation_of(&list.toggle_expansion(1).unwrap());
    assert_ne!(first, second);

    // The response to the first request arrives late.
    list.resolve_line_items(1, first, Ok(produtos()));

    let expansion = list.expansion(1).unwrap();
    assert!(expansion.loading);
    assert!(expansion.produtos.is_none());

    // The current request still completes normally.
    list.resolve_line_items(1, second, Ok(produtos()));
    assert!(!list.expansion(1).unwrap().loading);
    assert!(list.expansion(1).unwrap().produtos.is_some());
}

#[test]
fn line_item_failure_clears_loading_and_fires_a_notice() {
    let mut list = OrderList::new();
    list.load();
    list.resolve_load(Ok(vec![pedido(1, "Maria Silva")]));

    let generation = generation_of(&list.toggle_expansion(1).unwrap());
    list.resolve_line_items(1, generation, Err(BalcaoError::Server));

    let expansion = list.expansion(1).unwrap();
    assert!(!expansion.loading);
    assert!(expansion.produtos.is_none());

    let notices = list.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(
        notices[0].message,
        "Erro ao carregar produtos: Erro interno do servidor"
    );
}

#[test]
fn delete_requires_confirmation() {
    let mut list = OrderList::new();
    list.load();
    list.resolve_load(Ok(vec![pedido(1, "Maria Silva")]));

    // Without a pending request, confirm is a no-op.
    assert!(list.confirm_delete().is_none());

    let alvo = list.pedidos()[0].clone();
    list.request_delete(&alvo);
    assert_eq!(list.pending_delete().unwrap().id, Some(1));

    // Declining leaves everything untouched.
    list.cancel_delete();
    assert!(list.pending_delete().is_none());
    assert!(list.confirm_delete().is_none());

    list.request_delete(&alvo);
    assert_eq!(
        list.confirm_delete(),
        Some(ListCommand::DeleteOrder { pedido_id: 1 })
    );
    assert!(list.pending_delete().is_none());
}

#[test]
fn delete_of_unsaved_order_is_ignored() {
    let mut list = OrderList::new();
    let rascunho = Pedido {
        id: None,
        nome_comprador: "Maria".to_string(),
        nome_fornecedor: "João".to_string(),
        valor_total_comprado: None,
        total_produtos_comprados: None,
        produtos: None,
    };

    list.request_delete(&rascunho);
    assert!(list.pending_delete().is_none());
}

#[test]
fn successful_delete_reloads_with_a_success_notice() {
    let mut list = OrderList::new();

    let command = list.resolve_delete(Ok(()));

    assert_eq!(command, Some(ListCommand::LoadOrders));
    assert!(list.carregando());
    let notices = list.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Info);
    assert_eq!(notices[0].message, "Pedido excluído com sucesso!");
}

#[test]
fn failed_delete_fires_an_error_notice_without_reloading() {
    let mut list = OrderList::new();

    let command = list.resolve_delete(Err(BalcaoError::NotFound));

    assert!(command.is_none());
    assert!(!list.carregando());
    let notices = list.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(
        notices[0].message,
        "Erro ao excluir pedido: Pedido não encontrado"
    );
}

#[test]
fn saved_form_outcome_reloads_with_mode_specific_notice() {
    let mut list = OrderList::new();

    let command = list.form_closed(FormOutcome::Saved {
        mode: FormMode::Create,
        pedido: pedido(42, "Maria Silva"),
    });
    assert_eq!(command, Some(ListCommand::LoadOrders));
    let notices = list.take_notices();
    assert_eq!(notices[0].message, "Pedido criado com sucesso!");

    let command = list.form_closed(FormOutcome::Saved {
        mode: FormMode::Edit,
        pedido: pedido(42, "Maria Silva"),
    });
    assert_eq!(command, Some(ListCommand::LoadOrders));
    let notices = list.take_notices();
    assert_eq!(notices[0].message, "Pedido atualizado com sucesso!");
}

#[test]
fn cancelled_form_outcome_does_nothing() {
    let mut list = OrderList::new();

    assert!(list.form_closed(FormOutcome::Cancelled).is_none());
    assert!(list.take_notices().is_empty());
    assert!(!list.carregando());
}
