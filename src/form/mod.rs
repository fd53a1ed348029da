//! Order form: editable drafts and the submit state machine.

pub mod controller;
pub mod draft;

pub use controller::{FormMode, FormOutcome, FormState, OrderForm, SubmitRequest};
pub use draft::{Field, LineItemDraft, LineItemForm, RemoveOutcome, parse_decimal};
