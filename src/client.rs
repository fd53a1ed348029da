//! Async REST client for the pedidos API.
//!
//! One method per remote operation on the `/api/pedidos` resource. Every
//! failure is delivered through the returned `Result` — nothing panics and
//! nothing retries. Non-success HTTP statuses map onto the crate error
//! taxonomy ([`BalcaoError::Validation`], [`NotFound`](BalcaoError::NotFound),
//! [`Server`](BalcaoError::Server), [`Unknown`](BalcaoError::Unknown));
//! transport failures map to [`BalcaoError::Network`].

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::{Pedido, ProdutoPedido};
use crate::{BalcaoError, Result};

/// Client for the pedidos REST API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct PedidoClient {
    http: reqwest::Client,
    /// Fully-qualified resource root, e.g. `http://host:8080/api/pedidos`.
    api_url: String,
}

impl PedidoClient {
    /// Creates a client for the API at `base_url` (scheme + host + port).
    ///
    /// # Errors
    ///
    /// Returns [`BalcaoError::Io`] if the underlying HTTP client cannot be
    /// built.
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| BalcaoError::Io(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_url: format!("{}/api/pedidos", base_url.trim_end_matches('/')),
        })
    }

    /// Lists all pedidos (without nested line items).
    pub async fn listar_todos(&self) -> Result<Vec<Pedido>> {
        let response = self.get(&self.api_url).await?;
        decode(response).await
    }

    /// Fetches a single pedido by id.
    pub async fn buscar_por_id(&self, id: i64) -> Result<Pedido> {
        let response = self.get(&format!("{}/{id}", self.api_url)).await?;
        decode(response).await
    }

    /// Creates a new pedido and returns the persisted record
    /// (server-assigned id and aggregates).
    pub async fn criar(&self, pedido: &Pedido) -> Result<Pedido> {
        debug!(comprador = %pedido.nome_comprador, "creating pedido");
        let response = self
            .http
            .post(&self.api_url)
            .json(pedido)
            .send()
            .await
            .map_err(transport_error)?;
        decode(check_status(response)?).await
    }

    /// Updates an existing pedido and returns the persisted record.
    pub async fn atualizar(&self, id: i64, pedido: &Pedido) -> Result<Pedido> {
        debug!(id, "updating pedido");
        let response = self
            .http
            .put(format!("{}/{id}", self.api_url))
            .json(pedido)
            .send()
            .await
            .map_err(transport_error)?;
        decode(check_status(response)?).await
    }

    /// Deletes a pedido.
    pub async fn deletar(&self, id: i64) -> Result<()> {
        debug!(id, "deleting pedido");
        let response = self
            .http
            .delete(format!("{}/{id}", self.api_url))
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response)?;
        Ok(())
    }

    /// Lists the line items of a pedido.
    pub async fn listar_produtos(&self, pedido_id: i64) -> Result<Vec<ProdutoPedido>> {
        let response = self
            .get(&format!("{}/{pedido_id}/produtos", self.api_url))
            .await?;
        decode(response).await
    }

    /// Issues a GET and maps transport and status failures.
    async fn get(&self, url: &str) -> Result<Response> {
        let response = self.http.get(url).send().await.map_err(transport_error)?;
        check_status(response)
    }
}

/// Maps a non-success HTTP status onto the crate error taxonomy.
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(map_status(status))
}

/// Status-code → error-variant mapping for the pedidos API.
fn map_status(status: StatusCode) -> BalcaoError {
    match status.as_u16() {
        400 => BalcaoError::Validation,
        404 => BalcaoError::NotFound,
        500 => BalcaoError::Server,
        code => BalcaoError::Unknown {
            status: code,
            message: status
                .canonical_reason()
                .unwrap_or("resposta inesperada")
                .to_string(),
        },
    }
}

/// A request-level reqwest failure, i.e. no HTTP response was obtained.
fn transport_error(err: reqwest::Error) -> BalcaoError {
    BalcaoError::Network(err.to_string())
}

/// Reads the response body and deserializes it.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await.map_err(transport_error)?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_the_documented_statuses() {
        assert!(matches!(
            map_status(StatusCode::BAD_REQUEST),
            BalcaoError::Validation
        ));
        assert!(matches!(
            map_status(StatusCode::NOT_FOUND),
            BalcaoError::NotFound
        ));
        assert!(matches!(
            map_status(StatusCode::INTERNAL_SERVER_ERROR),
            BalcaoError::Server
        ));
    }

    #[test]
    fn other_statuses_carry_their_code() {
        match map_status(StatusCode::SERVICE_UNAVAILABLE) {
            BalcaoError::Unknown { status, .. } => assert_eq!(status, 503),
            other => panic!("expected Unknown, got {other:?}"),
        }
    }

    #[test]
    fn error_messages_are_user_readable() {
        assert_eq!(
            map_status(StatusCode::BAD_REQUEST).to_string(),
            "Dados inválidos fornecidos"
        );
        assert_eq!(
            map_status(StatusCode::NOT_FOUND).to_string(),
            "Pedido não encontrado"
        );
        assert_eq!(
            map_status(StatusCode::INTERNAL_SERVER_ERROR).to_string(),
            "Erro interno do servidor"
        );
    }

    #[test]
    fn resource_url_is_rooted_at_api_pedidos() {
        let client = PedidoClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.api_url, "http://localhost:8080/api/pedidos");
    }
}
