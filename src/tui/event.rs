//! Event handling for the TUI.
//!
//! `update` is the single place application state changes: terminal input
//! and network results arrive as [`Message`]s, and anything that needs the
//! network goes back out as an [`Action`] for the runtime to execute.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::BalcaoError;
use crate::form::{FormState, OrderForm, SubmitRequest};
use crate::list::ListCommand;
use crate::models::{Pedido, ProdutoPedido};

use super::app::{App, FormFocus, Mode};

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),

    /// Result of the list-orders request.
    OrdersLoaded(Result<Vec<Pedido>, BalcaoError>),
    /// Result of a line-items request, tagged with the expansion
    /// generation it was issued for.
    LineItemsLoaded {
        pedido_id: i64,
        generation: u64,
        result: Result<Vec<ProdutoPedido>, BalcaoError>,
    },
    /// Result of a create or update request.
    OrderSaved(Result<Pedido, BalcaoError>),
    /// Result of a delete request.
    OrderDeleted(Result<(), BalcaoError>),

    /// Request to quit the application.
    Quit,
}

/// Network operations requested by `update`, executed by the runtime.
#[derive(Debug)]
pub enum Action {
    List(ListCommand),
    Submit(SubmitRequest),
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) -> Option<Action> {
    match message {
        Message::Input(event) => handle_input(app, event),
        Message::OrdersLoaded(result) => {
            app.list.resolve_load(result);
            app.clamp_selection();
            None
        }
        Message::LineItemsLoaded {
            pedido_id,
            generation,
            result,
        } => {
            app.list.resolve_line_items(pedido_id, generation, result);
            None
        }
        Message::OrderSaved(result) => {
            // A result arriving after the dialog closed has no UI effect.
            let form = app.form.as_mut()?;
            form.resolve_submit(result);
            if form.state() == FormState::ClosedSuccess {
                let outcome = app.close_form()?;
                return app.list.form_closed(outcome).map(Action::List);
            }
            None
        }
        Message::OrderDeleted(result) => app.list.resolve_delete(result).map(Action::List),
        Message::Quit => {
            app.should_quit = true;
            None
        }
    }
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) => None,
        Event::Tick => {
            app.clear_stale_notice();
            None
        }
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    // Ctrl-C always quits.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return None;
    }

    match app.mode() {
        Mode::List => handle_list_keys(app, key),
        Mode::Form => handle_form_keys(app, key),
        Mode::ConfirmDelete => handle_confirm_keys(app, key),
    }
}

/// Handles keys for the order list view.
fn handle_list_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            None
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.selected + 1 < app.list.pedidos().len() {
                app.selected += 1;
            }
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.selected = app.selected.saturating_sub(1);
            None
        }
        KeyCode::Char('g') => {
            app.selected = 0;
            None
        }
        KeyCode::Char('G') => {
            app.selected = app.list.pedidos().len().saturating_sub(1);
            None
        }
        // Expand/collapse the selected order's line items.
        KeyCode::Enter | KeyCode::Char(' ') => {
            let id = app.list.pedidos().get(app.selected)?.id?;
            app.list.toggle_expansion(id).map(Action::List)
        }
        KeyCode::Char('r') => Some(Action::List(app.list.load())),
        KeyCode::Char('n') => {
            app.open_form(OrderForm::create());
            None
        }
        KeyCode::Char('e') => {
            let pedido = app.list.pedidos().get(app.selected)?.clone();
            app.open_form(OrderForm::edit(&pedido));
            None
        }
        KeyCode::Char('d') => {
            let pedido = app.list.pedidos().get(app.selected)?.clone();
            app.list.request_delete(&pedido);
            None
        }
        _ => None,
    }
}

/// Handles keys inside the form dialog.
fn handle_form_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    let submitting = app
        .form
        .as_ref()
        .is_some_and(|form| form.state() == FormState::Submitting);

    if key.code == KeyCode::Esc {
        if let Some(form) = app.form.as_mut() {
            form.cancel();
        }
        let outcome = app.close_form()?;
        return app.list.form_closed(outcome).map(Action::List);
    }

    // While a submit is outstanding only Esc is honored; the controller's
    // own guard makes a second Enter harmless anyway.
    if submitting {
        return None;
    }

    match key.code {
        KeyCode::Enter => app.form.as_mut()?.submit().map(Action::Submit),
        KeyCode::Tab | KeyCode::Down => {
            app.focus_next();
            None
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus_prev();
            None
        }
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.as_mut()?.add_item();
            None
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let FormFocus::Item { index, .. } = app.form_focus {
                app.form.as_mut()?.remove_item(index);
                app.clamp_item_focus();
                app.set_form_focus(app.form_focus);
            }
            None
        }
        KeyCode::Char(c) => {
            app.editor.insert(c);
            app.apply_edit();
            None
        }
        KeyCode::Backspace => {
            app.editor.backspace();
            app.apply_edit();
            None
        }
        KeyCode::Delete => {
            app.editor.delete();
            app.apply_edit();
            None
        }
        KeyCode::Left => {
            app.editor.move_left();
            None
        }
        KeyCode::Right => {
            app.editor.move_right();
            None
        }
        KeyCode::Home => {
            app.editor.move_home();
            None
        }
        KeyCode::End => {
            app.editor.move_end();
            None
        }
        _ => None,
    }
}

/// Handles keys in the delete-confirmation dialog.
fn handle_confirm_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('s') | KeyCode::Enter => {
            app.list.confirm_delete().map(Action::List)
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.list.cancel_delete();
            None
        }
        _ => None,
    }
}
