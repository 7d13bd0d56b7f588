//! Edit history (undo/redo) for the command buffer.

/// Kind of a recorded edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// `text` was inserted at `start`
    Insert,
    /// `text` was removed from `[start, end)`
    Delete,
}

/// A single edit that can be undone/redone.
///
/// Offsets are byte offsets into the buffer content at the time the edit
/// was applied. `text` holds the exact bytes inserted or removed, so the
/// inverse can be replayed without consulting the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditAction {
    pub kind: EditKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
    /// Cursor position before the edit (restored by undo)
    pub cursor_before: usize,
    /// Cursor position after the edit (restored by redo)
    pub cursor_after: usize,
}

impl EditAction {
    /// Create an insert action
    pub fn insert(start: usize, text: String, cursor_before: usize, cursor_after: usize) -> Self {
        Self {
            kind: EditKind::Insert,
            end: start + text.len(),
            text,
            start,
            cursor_before,
            cursor_after,
        }
    }

    /// Create a delete action
    pub fn delete(start: usize, text: String, cursor_before: usize, cursor_after: usize) -> Self {
        Self {
            kind: EditKind::Delete,
            end: start + text.len(),
            text,
            start,
            cursor_before,
            cursor_after,
        }
    }
}

/// Edit history with undo/redo stacks.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo_stack: Vec<EditAction>,
    redo_stack: Vec<EditAction>,
    max_size: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EditHistory {
    /// Create a new edit history with default max size
    pub fn new() -> Self {
        Self::with_max_size(1000)
    }

    /// Create a new edit history with specified max size
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size: max_size.max(1),
        }
    }

    /// Push an action onto the undo stack (clears redo stack)
    pub fn push(&mut self, action: EditAction) {
        self.redo_stack.clear();
        self.undo_stack.push(action);

        if self.undo_stack.len() > self.max_size {
            let excess = self.undo_stack.len() - self.max_size;
            self.undo_stack.drain(..excess);
        }
    }

    /// Pop an action from the undo stack and park it on the redo stack.
    ///
    /// The returned action is the original edit; the caller applies its inverse.
    pub fn pop_undo(&mut self) -> Option<EditAction> {
        let action = self.undo_stack.pop()?;
        self.redo_stack.push(action.clone());
        Some(action)
    }

    /// Pop an action from the redo stack and move it back onto the undo stack.
    ///
    /// The returned action is the original edit; the caller re-applies it.
    pub fn pop_redo(&mut self) -> Option<EditAction> {
        let action = self.redo_stack.pop()?;
        self.undo_stack.push(action.clone());
        Some(action)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Actions in the order they were applied
    pub fn undo_actions(&self) -> &[EditAction] {
        &self.undo_stack
    }
}
