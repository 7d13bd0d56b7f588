//! Syntax module
//!
//! Classifies a command line into tokens for coloring and layout:
//!
//! ```text
//! curl -X POST https://api.example.com -d '{"a": 1}'
//! ^^^^ ^^ ^^^^ ^^^^^^^^^^^^^^^^^^^^^^^ ^^ ^^^^^^^^^^
//! Cmd  Flag Method       Url          Flag  String
//! ```
//!
//! Tokenizing is pure and cheap; callers re-run it after every edit.

mod highlights;
mod tokenizer;

pub use highlights::{highlight_id_for_name, HighlightId, HIGHLIGHT_NAMES};
pub use tokenizer::{tokenize, Token, TokenKind, HTTP_METHODS};
