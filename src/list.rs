//! Order list controller.
//!
//! Owns the pedido collection, the per-order expansion state and the
//! delete-confirmation step. Like the form controller it performs no I/O:
//! operations that need the network return a [`ListCommand`] for the
//! runtime to execute, and results come back through the `resolve_*`
//! methods.
//!
//! Expansion state is a single record per order id — presence of the
//! record *is* the expanded flag, so loading/cached state cannot exist for
//! a collapsed row. Each record carries a generation number; line-item
//! responses from a previous generation (the row was collapsed or
//! re-expanded meanwhile) are discarded.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::BalcaoError;
use crate::models::{Pedido, ProdutoPedido};
use crate::notice::Notice;

use super::form::{FormMode, FormOutcome};

/// Network operations requested by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListCommand {
    /// Fetch the full order collection.
    LoadOrders,
    /// Fetch the line items of one order.
    LoadLineItems { pedido_id: i64, generation: u64 },
    /// Delete one order.
    DeleteOrder { pedido_id: i64 },
}

/// Expansion record for a single order.
#[derive(Clone, Debug)]
pub struct ExpansionState {
    /// A line-item fetch is outstanding.
    pub loading: bool,
    /// Cached line items, absent until first successfully loaded.
    pub produtos: Option<Vec<ProdutoPedido>>,
    generation: u64,
}

/// State for the order list view.
#[derive(Debug, Default)]
pub struct OrderList {
    pedidos: Vec<Pedido>,
    carregando: bool,
    expansions: HashMap<i64, ExpansionState>,
    next_generation: u64,
    pending_delete: Option<Pedido>,
    notices: Vec<Notice>,
}

impl OrderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered collection; single source of truth for the list.
    pub fn pedidos(&self) -> &[Pedido] {
        &self.pedidos
    }

    /// A list fetch is outstanding.
    pub fn carregando(&self) -> bool {
        self.carregando
    }

    /// Starts (re)loading the order collection.
    pub fn load(&mut self) -> ListCommand {
        self.carregando = true;
        ListCommand::LoadOrders
    }

    /// Delivers the result of [`load`](Self::load).
    ///
    /// On failure the previous collection is kept as-is.
    pub fn resolve_load(&mut self, result: Result<Vec<Pedido>, BalcaoError>) {
        self.carregando = false;
        match result {
            Ok(pedidos) => {
                info!(count = pedidos.len(), "pedidos loaded");
                self.pedidos = pedidos;
                // Drop expansion records for orders that no longer exist.
                let ids: Vec<i64> = self.pedidos.iter().filter_map(|p| p.id).collect();
                self.expansions.retain(|id, _| ids.contains(id));
            }
            Err(erro) => {
                self.notices
                    .push(Notice::error(format!("Erro ao carregar pedidos: {erro}")));
            }
        }
    }

    /// Whether the given order is currently expanded.
    pub fn is_expanded(&self, pedido_id: i64) -> bool {
        self.expansions.contains_key(&pedido_id)
    }

    /// Expansion record of an order, when expanded.
    pub fn expansion(&self, pedido_id: i64) -> Option<&ExpansionState> {
        self.expansions.get(&pedido_id)
    }

    /// Expands a collapsed order (starting a line-item fetch) or collapses
    /// an expanded one (discarding cached items and the loading flag, so a
    /// later expand refetches).
    pub fn toggle_expansion(&mut self, pedido_id: i64) -> Option<ListCommand> {
        if self.expansions.remove(&pedido_id).is_some() {
            debug!(pedido_id, "collapsed");
            return None;
        }

        let generation = self.next_generation;
        self.next_generation += 1;
        self.expansions.insert(
            pedido_id,
            ExpansionState {
                loading: true,
                produtos: None,
                generation,
            },
        );
        Some(ListCommand::LoadLineItems {
            pedido_id,
            generation,
        })
    }

    /// Delivers the result of a line-item fetch.
    ///
    /// Stale responses — the row was collapsed, or collapsed and expanded
    /// again since the request went out — are ignored.
    pub fn resolve_line_items(
        &mut self,
        pedido_id: i64,
        generation: u64,
        result: Result<Vec<ProdutoPedido>, BalcaoError>,
    ) {
        let Some(entry) = self.expansions.get_mut(&pedido_id) else {
            debug!(pedido_id, generation, "line items for collapsed row discarded");
            return;
        };
        if entry.generation != generation {
            debug!(pedido_id, generation, "stale line-item response discarded");
            return;
        }

        entry.loading = false;
        match result {
            Ok(produtos) => entry.produtos = Some(produtos),
            Err(erro) => {
                self.notices
                    .push(Notice::error(format!("Erro ao carregar produtos: {erro}")));
            }
        }
    }

    /// Starts the delete-confirmation step. Orders without an id (never
    /// persisted) are ignored.
    pub fn request_delete(&mut self, pedido: &Pedido) {
        if pedido.id.is_some() {
            self.pending_delete = Some(pedido.clone());
        }
    }

    /// The order awaiting delete confirmation, if any.
    pub fn pending_delete(&self) -> Option<&Pedido> {
        self.pending_delete.as_ref()
    }

    /// Confirms the pending deletion. Without a pending request this is a
    /// no-op — no confirmation, no call.
    pub fn confirm_delete(&mut self) -> Option<ListCommand> {
        let pedido = self.pending_delete.take()?;
        pedido.id.map(|pedido_id| ListCommand::DeleteOrder { pedido_id })
    }

    /// Abandons the pending deletion.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delivers the result of a delete; success reloads the list.
    pub fn resolve_delete(&mut self, result: Result<(), BalcaoError>) -> Option<ListCommand> {
        match result {
            Ok(()) => {
                self.notices
                    .push(Notice::info("Pedido excluído com sucesso!"));
                Some(self.load())
            }
            Err(erro) => {
                self.notices
                    .push(Notice::error(format!("Erro ao excluir pedido: {erro}")));
                None
            }
        }
    }

    /// Reacts to the form's terminal outcome: a save triggers a reload and
    /// a success notice, a cancel does nothing.
    pub fn form_closed(&mut self, outcome: FormOutcome) -> Option<ListCommand> {
        match outcome {
            FormOutcome::Saved { mode, .. } => {
                let mensagem = match mode {
                    FormMode::Create => "Pedido criado com sucesso!",
                    FormMode::Edit => "Pedido atualizado com sucesso!",
                };
                self.notices.push(Notice::info(mensagem));
                Some(self.load())
            }
            FormOutcome::Cancelled => None,
        }
    }

    /// Drains queued notices for display.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
