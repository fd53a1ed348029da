//! Application state for the TUI.

use std::time::Instant;

use crate::form::{Field, FormOutcome, OrderForm};
use crate::list::OrderList;
use crate::notice::Notice;

use super::input::TextInput;

/// How long a notice stays on screen.
const NOTICE_DURATION_SECS: u64 = 5;

/// Which part of the form dialog has input focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormFocus {
    Comprador,
    Fornecedor,
    Item { index: usize, field: ItemField },
}

/// Fields inside one line-item row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemField {
    Nome,
    Quantidade,
    Valor,
}

/// What the keyboard currently drives.
///
/// Derived from controller state rather than stored, so it cannot drift
/// out of sync with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    List,
    Form,
    ConfirmDelete,
}

/// A notice with its display timestamp for auto-clear.
#[derive(Clone, Debug)]
pub struct NoticeDisplay {
    pub notice: Notice,
    pub shown_at: Instant,
}

/// Central application state container.
pub struct App {
    /// Order list controller.
    pub list: OrderList,
    /// Open form dialog, if any.
    pub form: Option<OrderForm>,
    /// Focused field inside the form dialog.
    pub form_focus: FormFocus,
    /// Editor state for the focused form field.
    pub editor: TextInput,
    /// Selected row in the order table (index into `list.pedidos()`).
    pub selected: usize,
    /// Latest notice on screen (clears after a timeout).
    pub notice: Option<NoticeDisplay>,
    /// API base URL, shown in the status bar.
    pub api_label: String,
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates a new App instance with default state.
    pub fn new(api_label: impl Into<String>) -> Self {
        Self {
            list: OrderList::new(),
            form: None,
            form_focus: FormFocus::Comprador,
            editor: TextInput::new(),
            selected: 0,
            notice: None,
            api_label: api_label.into(),
            should_quit: false,
        }
    }

    /// Current input mode, derived from controller state.
    pub fn mode(&self) -> Mode {
        if self.list.pending_delete().is_some() {
            Mode::ConfirmDelete
        } else if self.form.is_some() {
            Mode::Form
        } else {
            Mode::List
        }
    }

    /// Opens the form dialog and focuses the buyer field.
    pub fn open_form(&mut self, form: OrderForm) {
        self.form = Some(form);
        self.set_form_focus(FormFocus::Comprador);
    }

    /// Closes the form dialog, returning its terminal outcome if it had one.
    pub fn close_form(&mut self) -> Option<FormOutcome> {
        let outcome = self.form.as_ref().and_then(OrderForm::outcome);
        self.form = None;
        outcome
    }

    /// Moves focus to `focus` and loads the editor from that field.
    pub fn set_form_focus(&mut self, focus: FormFocus) {
        self.form_focus = focus;
        let content = self
            .form
            .as_ref()
            .and_then(|form| focused_field(form, focus))
            .map(|field| field.value().to_string())
            .unwrap_or_default();
        self.editor = TextInput::with_content(content);
    }

    /// Writes the editor content back into the focused form field.
    pub fn apply_edit(&mut self) {
        let focus = self.form_focus;
        let content = self.editor.text().to_string();
        if let Some(form) = self.form.as_mut()
            && let Some(field) = focused_field_mut(form, focus)
        {
            field.set_value(content);
        }
    }

    /// Advances focus to the next field, wrapping after the last item row.
    pub fn focus_next(&mut self) {
        let items = self.form.as_ref().map_or(1, |f| f.itens.len());
        let next = match self.form_focus {
            FormFocus::Comprador => FormFocus::Fornecedor,
            FormFocus::Fornecedor => FormFocus::Item {
                index: 0,
                field: ItemField::Nome,
            },
            FormFocus::Item { index, field } => match field {
                ItemField::Nome => FormFocus::Item {
                    index,
                    field: ItemField::Quantidade,
                },
                ItemField::Quantidade => FormFocus::Item {
                    index,
                    field: ItemField::Valor,
                },
                ItemField::Valor if index + 1 < items => FormFocus::Item {
                    index: index + 1,
                    field: ItemField::Nome,
                },
                ItemField::Valor => FormFocus::Comprador,
            },
        };
        self.set_form_focus(next);
    }

    /// Moves focus to the previous field.
    pub fn focus_prev(&mut self) {
        let items = self.form.as_ref().map_or(1, |f| f.itens.len());
        let prev = match self.form_focus {
            FormFocus::Comprador => FormFocus::Item {
                index: items.saturating_sub(1),
                field: ItemField::Valor,
            },
            FormFocus::Fornecedor => FormFocus::Comprador,
            FormFocus::Item { index, field } => match field {
                ItemField::Nome if index == 0 => FormFocus::Fornecedor,
                ItemField::Nome => FormFocus::Item {
                    index: index - 1,
                    field: ItemField::Valor,
                },
                ItemField::Quantidade => FormFocus::Item {
                    index,
                    field: ItemField::Nome,
                },
                ItemField::Valor => FormFocus::Item {
                    index,
                    field: ItemField::Quantidade,
                },
            },
        };
        self.set_form_focus(prev);
    }

    /// Clamps the focused item index after a row was removed.
    pub fn clamp_item_focus(&mut self) {
        let items = self.form.as_ref().map_or(1, |f| f.itens.len());
        if let FormFocus::Item { index, field } = self.form_focus
            && index >= items
        {
            self.set_form_focus(FormFocus::Item {
                index: items - 1,
                field,
            });
        }
    }

    /// Keeps the selected row inside the collection bounds.
    pub fn clamp_selection(&mut self) {
        let len = self.list.pedidos().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Shows a notice (replacing any current one).
    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(NoticeDisplay {
            notice,
            shown_at: Instant::now(),
        });
    }

    /// Pulls queued notices out of the controllers; the latest one wins.
    pub fn drain_notices(&mut self) {
        let mut queued = self.list.take_notices();
        if let Some(form) = self.form.as_mut() {
            queued.extend(form.take_notices());
        }
        if let Some(notice) = queued.pop() {
            self.show_notice(notice);
        }
    }

    /// Clears a notice older than the display duration.
    pub fn clear_stale_notice(&mut self) {
        if let Some(ref display) = self.notice
            && display.shown_at.elapsed() > std::time::Duration::from_secs(NOTICE_DURATION_SECS)
        {
            self.notice = None;
        }
    }
}

/// Resolves the focused field inside a form.
pub fn focused_field(form: &OrderForm, focus: FormFocus) -> Option<&Field> {
    match focus {
        FormFocus::Comprador => Some(&form.nome_comprador),
        FormFocus::Fornecedor => Some(&form.nome_fornecedor),
        FormFocus::Item { index, field } => form.itens.drafts().get(index).map(|draft| match field {
            ItemField::Nome => &draft.nome_produto,
            ItemField::Quantidade => &draft.quantidade,
            ItemField::Valor => &draft.valor,
        }),
    }
}

fn focused_field_mut(form: &mut OrderForm, focus: FormFocus) -> Option<&mut Field> {
    match focus {
        FormFocus::Comprador => Some(&mut form.nome_comprador),
        FormFocus::Fornecedor => Some(&mut form.nome_fornecedor),
        FormFocus::Item { index, field } => {
            form.itens
                .drafts_mut()
                .get_mut(index)
                .map(|draft| match field {
                    ItemField::Nome => &mut draft.nome_produto,
                    ItemField::Quantidade => &mut draft.quantidade,
                    ItemField::Valor => &mut draft.valor,
                })
        }
    }
}
