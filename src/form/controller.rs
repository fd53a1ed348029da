//! Order form controller.
//!
//! A two-mode (create/edit) state machine over the buyer/supplier fields
//! and the [`LineItemForm`]. `submit` never performs I/O itself: when the
//! form is valid it transitions to `Submitting` and hands back a
//! [`SubmitRequest`] for the runtime to execute; the result comes back
//! through [`resolve_submit`](OrderForm::resolve_submit).

use tracing::debug;

use crate::BalcaoError;
use crate::models::Pedido;
use crate::notice::Notice;

use super::draft::{Field, LineItemForm, RemoveOutcome, nome_valido};

/// Whether the form creates a new pedido or edits an existing one.
/// Fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Lifecycle of the form.
///
/// `Submitting` is the only state with an outstanding network call;
/// `submit` is a no-op there, which guards against duplicate submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormState {
    Editable,
    Submitting,
    ClosedSuccess,
    ClosedCancelled,
}

/// Terminal outcome reported to whoever opened the form.
#[derive(Clone, Debug, PartialEq)]
pub enum FormOutcome {
    /// The server accepted the pedido; carries the persisted record.
    Saved { mode: FormMode, pedido: Pedido },
    Cancelled,
}

/// The network call a valid submit asks the runtime to perform.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitRequest {
    pub mode: FormMode,
    /// Original id, present in edit mode.
    pub pedido_id: Option<i64>,
    pub payload: Pedido,
}

/// Editable order form with create-or-update submission.
#[derive(Clone, Debug)]
pub struct OrderForm {
    mode: FormMode,
    pedido_id: Option<i64>,
    pub nome_comprador: Field,
    pub nome_fornecedor: Field,
    pub itens: LineItemForm,
    state: FormState,
    saved: Option<Pedido>,
    notices: Vec<Notice>,
}

impl OrderForm {
    /// Opens the form in create mode: empty fields, one blank line item.
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            pedido_id: None,
            nome_comprador: Field::new(),
            nome_fornecedor: Field::new(),
            itens: LineItemForm::new(),
            state: FormState::Editable,
            saved: None,
            notices: Vec::new(),
        }
    }

    /// Opens the form in edit mode, populated from an existing pedido.
    ///
    /// A pedido without line items still gets one blank draft.
    pub fn edit(pedido: &Pedido) -> Self {
        let mut itens = LineItemForm::new();
        itens.load_from(pedido.produtos.as_deref().unwrap_or(&[]));

        Self {
            mode: FormMode::Edit,
            pedido_id: pedido.id,
            nome_comprador: Field::with_value(&pedido.nome_comprador),
            nome_fornecedor: Field::with_value(&pedido.nome_fornecedor),
            itens,
            state: FormState::Editable,
            saved: None,
            notices: Vec::new(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// The persisted pedido after a successful submit.
    pub fn saved(&self) -> Option<&Pedido> {
        self.saved.as_ref()
    }

    /// Order-level fields plus every draft pass validation, and at least
    /// one draft exists (guaranteed by the form model's never-empty rule).
    pub fn is_valid(&self) -> bool {
        nome_valido(self.nome_comprador.value())
            && nome_valido(self.nome_fornecedor.value())
            && !self.itens.is_empty()
            && self.itens.all_valid()
    }

    /// Appends a blank line item.
    pub fn add_item(&mut self) {
        self.itens.add_blank();
    }

    /// Removes the line item at `index`.
    ///
    /// Removing the last remaining item is rejected; the only observable
    /// effect is the at-least-one-product notice.
    pub fn remove_item(&mut self, index: usize) -> RemoveOutcome {
        let outcome = self.itens.remove_at(index);
        if outcome == RemoveOutcome::Rejected && index < self.itens.len() {
            self.notices
                .push(Notice::error("É necessário ter pelo menos um produto"));
        }
        outcome
    }

    /// Attempts to submit the form.
    ///
    /// Returns the request to execute when the form is valid; otherwise
    /// marks every field touched, queues the fill-all-fields notice and
    /// returns `None`. Also returns `None` (with no side effects) unless
    /// the form is currently `Editable`.
    pub fn submit(&mut self) -> Option<SubmitRequest> {
        if self.state != FormState::Editable {
            debug!(state = ?self.state, "submit ignored outside Editable");
            return None;
        }

        if !self.is_valid() {
            self.mark_all_touched();
            self.notices.push(Notice::error(
                "Por favor, preencha todos os campos obrigatórios",
            ));
            return None;
        }

        self.state = FormState::Submitting;
        Some(SubmitRequest {
            mode: self.mode,
            pedido_id: self.pedido_id,
            payload: Pedido {
                id: self.pedido_id,
                nome_comprador: self.nome_comprador.value().trim().to_string(),
                nome_fornecedor: self.nome_fornecedor.value().trim().to_string(),
                valor_total_comprado: None,
                total_produtos_comprados: None,
                produtos: Some(self.itens.to_produtos()),
            },
        })
    }

    /// Delivers the result of the submit request.
    ///
    /// Ignored unless the form is `Submitting` — a response arriving after
    /// the form was cancelled is discarded.
    pub fn resolve_submit(&mut self, result: Result<Pedido, BalcaoError>) {
        if self.state != FormState::Submitting {
            debug!(state = ?self.state, "late submit result discarded");
            return;
        }

        match result {
            Ok(pedido) => {
                self.saved = Some(pedido);
                self.state = FormState::ClosedSuccess;
            }
            Err(erro) => {
                self.notices
                    .push(Notice::error(format!("Erro ao salvar pedido: {erro}")));
                self.state = FormState::Editable;
            }
        }
    }

    /// Closes the form without saving.
    pub fn cancel(&mut self) {
        self.state = FormState::ClosedCancelled;
    }

    /// Terminal outcome, once the form has closed.
    pub fn outcome(&self) -> Option<FormOutcome> {
        match self.state {
            FormState::ClosedSuccess => self.saved.clone().map(|pedido| FormOutcome::Saved {
                mode: self.mode,
                pedido,
            }),
            FormState::ClosedCancelled => Some(FormOutcome::Cancelled),
            _ => None,
        }
    }

    /// Drains queued notices for display.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn mark_all_touched(&mut self) {
        self.nome_comprador.mark_touched();
        self.nome_fornecedor.mark_touched();
        self.itens.mark_all_touched();
    }
}
