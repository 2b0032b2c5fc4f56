//! Custom Yew hooks for the widget components.
//!
//! These hooks encapsulate reusable state logic to keep components clean and focused.

mod use_document_listener;
mod use_transition;

pub use use_document_listener::use_document_listener;
pub use use_transition::{use_transition, UseTransition};
