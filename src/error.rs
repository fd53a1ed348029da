//! Crate-level error types.
//!
//! [`BalcaoError`] unifies every error source (HTTP transport, the REST
//! API's status-code taxonomy, JSON, configuration, terminal I/O) behind a
//! single enum so callers can match on the variant they care about while
//! still using the `?` operator for easy propagation.
//!
//! The API variants render pt-BR messages because `Display` is what ends up
//! in the notice bar, matching the rest of the user-facing text.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BalcaoError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum BalcaoError {
    /// The request never produced an HTTP response (DNS failure, refused
    /// connection, broken transport).
    #[error("Falha de rede: {0}")]
    Network(String),

    /// The server rejected the payload (HTTP 400).
    #[error("Dados inválidos fornecidos")]
    Validation,

    /// The requested pedido does not exist (HTTP 404).
    #[error("Pedido não encontrado")]
    NotFound,

    /// The server failed internally (HTTP 500).
    #[error("Erro interno do servidor")]
    Server,

    /// Any other non-success status.
    #[error("Erro {status}: {message}")]
    Unknown { status: u16, message: String },

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid or inconsistent configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal or other I/O failure.
    #[error("io error: {0}")]
    Io(String),
}
