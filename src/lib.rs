//! reqline - editor core for HTTP command lines
//!
//! This crate provides the text buffer, tokenizer and soft-wrap layout
//! behind a single command-line input, driven by decoded intents in the
//! Elm Architecture style: [`update::update`] applies a
//! [`editable::TextEditMsg`] to a [`model::CommandEditor`].

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod layout;
pub mod measure;
pub mod model;
pub mod syntax;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use config::EditorConfig;
pub use editable::{TextBuffer, TextEditMsg};
pub use model::{CommandEditor, FocusState};
pub use update::update;
