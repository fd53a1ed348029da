//! Terminal client for the pedidos purchase-order API.
//!
//! Provides typed wire models, an async REST client for the
//! `/api/pedidos` resource, framework-free controllers for the order list
//! and the order form, and a Ratatui front end that drives them.

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod format;
pub mod list;
pub mod models;
pub mod notice;
pub mod tui;

pub use error::{BalcaoError, Result};
