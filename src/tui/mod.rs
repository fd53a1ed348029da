//! Terminal user interface for the pedidos client.
//!
//! Ratatui front end: an order table with inline expansion rows, a modal
//! form dialog for create/edit, and a delete-confirmation dialog, all
//! driven through the `update` message loop.

pub mod app;
pub mod components;
pub mod event;
pub mod input;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Action, Event, Message};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
