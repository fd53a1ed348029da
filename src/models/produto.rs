//! Line item of a pedido.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product entry within a pedido.
///
/// Line items are owned by their parent [`Pedido`](super::Pedido); the `id`
/// is absent until the server has persisted the item.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoPedido {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nome_produto: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantidade_comprada: Decimal,
    /// Total value for this line, not a unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub valor_total_produto: Decimal,
}
