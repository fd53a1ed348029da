//! Purchase-order record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::produto::ProdutoPedido;

/// A purchase order: buyer, supplier and a sequence of line items.
///
/// `id` and the two aggregate fields are server-assigned; a client-side
/// draft carries `None` for all three and the server's response replaces
/// the draft entirely after a create or update.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pedido {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nome_comprador: String,
    pub nome_fornecedor: String,
    /// Server-computed sum of all line values.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub valor_total_comprado: Option<Decimal>,
    /// Server-computed sum of all line quantities.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub total_produtos_comprados: Option<Decimal>,
    /// Nested line items; the list endpoint omits them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produtos: Option<Vec<ProdutoPedido>>,
}
