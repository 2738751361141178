//! Core page logic – scroll mapping, form validation, and the submit
//! lifecycle.
//!
//! Nothing in this module depends on any TUI or rendering crate.
//! Every type is `Send + Sync` so it can be shared across async tasks.

pub mod content;
pub mod form;
pub mod scroll;
pub mod submit;
