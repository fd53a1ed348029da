//! Wire models for the pedidos REST API.
//!
//! Field names follow the API's pt-BR camelCase JSON shape
//! (`nomeComprador`, `valorTotalProduto`, ...); monetary values and
//! quantities travel as JSON numbers and are held as [`rust_decimal::Decimal`].

pub mod pedido;
pub mod produto;

pub use pedido::Pedido;
pub use produto::ProdutoPedido;
