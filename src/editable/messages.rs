//! Intent types accepted by the command editor.
//!
//! The UI collaborator decodes raw key and pointer events into these before
//! handing them to [`crate::update::update`].

/// Target for cursor movement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// Move one code point left
    Left,
    /// Move one code point right
    Right,
    /// Move one visual line up
    Up,
    /// Move one visual line down
    Down,
    /// Move to start of line
    LineStart,
    /// Move to end of line
    LineEnd,
    /// Move one word left
    WordLeft,
    /// Move one word right
    WordRight,
    /// Move to start of document
    DocumentStart,
    /// Move to end of document
    DocumentEnd,
}

impl MoveTarget {
    /// Up/Down need the wrapped layout to resolve
    pub fn is_vertical(&self) -> bool {
        matches!(self, MoveTarget::Up | MoveTarget::Down)
    }
}

/// Logical editing intent.
#[derive(Debug, Clone, PartialEq)]
pub enum TextEditMsg {
    // === Movement ===
    /// Move cursor without affecting selection
    Move(MoveTarget),
    /// Move cursor and extend selection
    MoveWithSelection(MoveTarget),
    /// Pointer press at layout coordinates (shift-click extends)
    Click { x: f32, y: f32, extend: bool },

    // === Editing ===
    /// Insert text (typed character, paste, completion)
    Insert(String),
    /// Delete code point before cursor (Backspace)
    Backspace,
    /// Delete code point after cursor (Delete)
    Delete,
    /// Delete the active selection
    DeleteSelection,
    /// Replace everything (loading a saved command); clears history
    SetText(String),

    // === Selection ===
    SelectAll,

    // === Undo/Redo ===
    Undo,
    Redo,

    // === Focus ===
    Focus,
    Blur,
}

impl TextEditMsg {
    /// Check if this message modifies the buffer
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            TextEditMsg::Insert(_)
                | TextEditMsg::Backspace
                | TextEditMsg::Delete
                | TextEditMsg::DeleteSelection
                | TextEditMsg::SetText(_)
                | TextEditMsg::Undo
                | TextEditMsg::Redo
        )
    }

    /// Check if resolving this message needs tokens and visual lines
    pub fn needs_layout(&self) -> bool {
        match self {
            TextEditMsg::Move(target) | TextEditMsg::MoveWithSelection(target) => {
                target.is_vertical()
            }
            TextEditMsg::Click { .. } => true,
            _ => false,
        }
    }
}
