//! Editable command buffer.
//!
//! This module owns everything that mutates the command text:
//!
//! - [`TextBuffer`]: content, byte-offset cursor, selection anchor, preferred column
//! - [`EditHistory`] / [`EditAction`]: undo/redo log of inserts and deletes
//! - [`Selection`]: anchor/head pair derived from the buffer
//! - [`TextEditMsg`] / [`MoveTarget`]: decoded user intents
//!
//! It has no knowledge of tokens or layout. Vertical movement, which needs
//! the wrapped layout, lives in [`crate::layout::move_vertical`].
//!
//! # Example
//!
//! ```
//! use reqline::editable::TextBuffer;
//!
//! let mut buffer = TextBuffer::new();
//! buffer.insert("curl ");
//! buffer.insert("-v");
//! buffer.undo();
//!
//! assert_eq!(buffer.get_text(), "curl ");
//! ```

mod buffer;
mod history;
mod messages;
mod selection;

pub use buffer::TextBuffer;
pub use history::{EditAction, EditHistory, EditKind};
pub use messages::{MoveTarget, TextEditMsg};
pub use selection::Selection;
