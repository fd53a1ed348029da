//! Wire-format tests for the pedidos API models.

use rust_decimal_macros::dec;

use balcao::models::{Pedido, ProdutoPedido};

const PEDIDOS_JSON: &str = include_str!("fixtures/pedidos.json");
const PEDIDO_JSON: &str = include_str!("fixtures/pedido.json");
const PRODUTOS_JSON: &str = include_str!("fixtures/produtos.json");

#[test]
fn test_pedido_list_deserializes() {
    let pedidos: Vec<Pedido> =
        serde_json::from_str(PEDIDOS_JSON).expect("Failed to deserialize pedidos list");

    assert_eq!(pedidos.len(), 2);

    let pedido = &pedidos[0];
    assert_eq!(pedido.id, Some(1));
    assert_eq!(pedido.nome_comprador, "Maria Silva");
    assert_eq!(pedido.nome_fornecedor, "Papelaria Central");
    assert_eq!(pedido.valor_total_comprado, Some(dec!(450.5)));
    assert_eq!(pedido.total_produtos_comprados, Some(dec!(6)));
    // The list endpoint omits nested line items.
    assert!(pedido.produtos.is_none());
}

#[test]
fn test_pedido_with_produtos_deserializes() {
    let pedido: Pedido =
        serde_json::from_str(PEDIDO_JSON).expect("Failed to deserialize pedido");

    assert_eq!(pedido.id, Some(7));
    let produtos = pedido.produtos.as_ref().expect("Expected produtos");
    assert_eq!(produtos.len(), 2);
    assert_eq!(produtos[0].id, Some(11));
    assert_eq!(produtos[0].nome_produto, "Caneta Azul");
    assert_eq!(produtos[0].quantidade_comprada, dec!(2));
    assert_eq!(produtos[0].valor_total_produto, dec!(150.0));
}

#[test]
fn test_produto_list_deserializes() {
    let produtos: Vec<ProdutoPedido> =
        serde_json::from_str(PRODUTOS_JSON).expect("Failed to deserialize produtos list");

    assert_eq!(produtos.len(), 3);

    // Quantities may be fractional and never-persisted items carry no id.
    let lapis = &produtos[2];
    assert_eq!(lapis.id, None);
    assert_eq!(lapis.nome_produto, "Lápis");
    assert_eq!(lapis.quantidade_comprada, dec!(1.5));
    assert_eq!(lapis.valor_total_produto, dec!(7.25));
}

#[test]
fn test_draft_pedido_serializes_without_server_fields() {
    let draft = Pedido {
        id: None,
        nome_comprador: "Maria".to_string(),
        nome_fornecedor: "João".to_string(),
        valor_total_comprado: None,
        total_produtos_comprados: None,
        produtos: Some(vec![ProdutoPedido {
            id: None,
            nome_produto: "Caneta".to_string(),
            quantidade_comprada: dec!(2),
            valor_total_produto: dec!(10.00),
        }]),
    };

    let value = serde_json::to_value(&draft).expect("Failed to serialize draft");
    let object = value.as_object().expect("Expected JSON object");

    assert!(!object.contains_key("id"));
    assert!(!object.contains_key("valorTotalComprado"));
    assert!(!object.contains_key("totalProdutosComprados"));
    assert_eq!(object["nomeComprador"], "Maria");
    assert_eq!(object["nomeFornecedor"], "João");

    let produto = &value["produtos"][0];
    assert!(produto.get("id").is_none());
    assert_eq!(produto["nomeProduto"], "Caneta");
    assert_eq!(produto["quantidadeComprada"], serde_json::json!(2.0));
    assert_eq!(produto["valorTotalProduto"], serde_json::json!(10.0));
}

#[test]
fn test_update_payload_keeps_ids() {
    let draft = Pedido {
        id: Some(7),
        nome_comprador: "Maria".to_string(),
        nome_fornecedor: "João".to_string(),
        valor_total_comprado: None,
        total_produtos_comprados: None,
        produtos: Some(vec![ProdutoPedido {
            id: Some(11),
            nome_produto: "Caneta Azul".to_string(),
            quantidade_comprada: dec!(2),
            valor_total_produto: dec!(150.0),
        }]),
    };

    let value = serde_json::to_value(&draft).expect("Failed to serialize draft");
    assert_eq!(value["id"], serde_json::json!(7));
    assert_eq!(value["produtos"][0]["id"], serde_json::json!(11));
}
