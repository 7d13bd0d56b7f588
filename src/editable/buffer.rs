//! The command buffer: owned UTF-8 content, a byte-offset cursor, an optional
//! selection anchor and the undo/redo log.
//!
//! Every public operation keeps `cursor` (and the anchor) clamped to
//! `[0, len]` and on a code point boundary. Nothing here fails: out-of-range
//! or empty operations are no-ops and report `false`.

use crate::util::text::{
    floor_boundary, line_end, line_start, next_boundary, prev_boundary, word_end_after,
    word_start_before,
};

use super::history::{EditAction, EditHistory, EditKind};
use super::selection::Selection;

/// Mutable text buffer with cursor, selection and history.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    content: String,
    cursor: usize,
    selection_anchor: Option<usize>,
    /// Horizontal pixel target for vertical navigation
    preferred_column: Option<f32>,
    /// Maximum content length in bytes (None = unlimited)
    max_len: Option<usize>,
    history: EditHistory,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `text` with the cursor at the end
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.set_text(text);
        buffer
    }

    /// Limit content length in bytes; inserts that would exceed it are rejected
    pub fn with_max_len(mut self, max_len: Option<usize>) -> Self {
        self.max_len = max_len;
        self
    }

    /// Bound the number of undoable actions
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = EditHistory::with_max_size(limit);
        self
    }

    /// Current content (no allocation)
    pub fn get_text(&self) -> &str {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection_anchor(&self) -> Option<usize> {
        self.selection_anchor
    }

    pub fn preferred_column(&self) -> Option<f32> {
        self.preferred_column
    }

    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Active (non-empty) selection, if any
    pub fn selection(&self) -> Option<Selection> {
        let anchor = self.selection_anchor?;
        let sel = Selection::new(anchor, self.cursor);
        (!sel.is_empty()).then_some(sel)
    }

    pub fn has_selection(&self) -> bool {
        self.selection().is_some()
    }

    /// Byte range of the active selection
    pub fn selection_range(&self) -> Option<std::ops::Range<usize>> {
        self.selection().map(|sel| sel.range())
    }

    /// Get the selected text (empty string if no selection)
    pub fn selected_text(&self) -> &str {
        match self.selection_range() {
            Some(range) => &self.content[range],
            None => "",
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Put the cursor at `offset` (clamped, snapped to a code point boundary).
    ///
    /// With `extend_selection` the anchor is set at the old cursor if unset;
    /// otherwise the selection is cleared.
    pub fn set_cursor(&mut self, offset: usize, extend_selection: bool) {
        let target = floor_boundary(&self.content, offset);
        self.preferred_column = None;
        self.place_cursor(target, extend_selection);
    }

    /// Set an explicit selection from `anchor` to `head` (cursor ends at `head`)
    pub fn set_selection(&mut self, anchor: usize, head: usize) {
        let anchor = floor_boundary(&self.content, anchor);
        let head = floor_boundary(&self.content, head);
        self.selection_anchor = Some(anchor);
        self.cursor = head;
        self.preferred_column = None;
    }

    /// Select all text
    pub fn select_all(&mut self) {
        self.set_selection(0, self.content.len());
    }

    /// Move the cursor and maintain the anchor according to `extend_selection`.
    fn place_cursor(&mut self, target: usize, extend_selection: bool) {
        if extend_selection {
            if self.selection_anchor.is_none() {
                self.selection_anchor = Some(self.cursor);
            }
        } else {
            self.selection_anchor = None;
        }
        self.cursor = target;
    }

    /// Cursor placement for vertical navigation; keeps `preferred_column`.
    pub(crate) fn place_cursor_vertically(
        &mut self,
        offset: usize,
        preferred_column: f32,
        extend_selection: bool,
    ) {
        let target = floor_boundary(&self.content, offset);
        self.place_cursor(target, extend_selection);
        self.preferred_column = Some(preferred_column);
    }
}

// =============================================================================
// Movement Operations
// =============================================================================

impl TextBuffer {
    /// Move cursor left by one code point, or one word with `word_jump`
    pub fn move_left(&mut self, extend_selection: bool, word_jump: bool) {
        self.preferred_column = None;

        // Collapse an existing selection to its near edge
        if !extend_selection {
            if let Some(sel) = self.selection() {
                self.cursor = sel.start();
                self.selection_anchor = None;
                return;
            }
        }

        let target = if word_jump {
            word_start_before(&self.content, self.cursor)
        } else {
            prev_boundary(&self.content, self.cursor)
        };
        self.place_cursor(target, extend_selection);
    }

    /// Move cursor right by one code point, or one word with `word_jump`
    pub fn move_right(&mut self, extend_selection: bool, word_jump: bool) {
        self.preferred_column = None;

        if !extend_selection {
            if let Some(sel) = self.selection() {
                self.cursor = sel.end();
                self.selection_anchor = None;
                return;
            }
        }

        let target = if word_jump {
            word_end_after(&self.content, self.cursor)
        } else {
            next_boundary(&self.content, self.cursor)
        };
        self.place_cursor(target, extend_selection);
    }

    /// Move cursor to just after the preceding line break
    pub fn move_line_start(&mut self, extend_selection: bool) {
        let target = line_start(&self.content, self.cursor);
        self.preferred_column = None;
        self.place_cursor(target, extend_selection);
    }

    /// Move cursor to the following line break (or the end)
    pub fn move_line_end(&mut self, extend_selection: bool) {
        let target = line_end(&self.content, self.cursor);
        self.preferred_column = None;
        self.place_cursor(target, extend_selection);
    }

    /// Move cursor to offset 0
    pub fn move_doc_start(&mut self, extend_selection: bool) {
        self.preferred_column = None;
        self.place_cursor(0, extend_selection);
    }

    /// Move cursor to the end of the content
    pub fn move_doc_end(&mut self, extend_selection: bool) {
        self.preferred_column = None;
        self.place_cursor(self.content.len(), extend_selection);
    }
}

// =============================================================================
// Editing Operations
// =============================================================================

impl TextBuffer {
    /// Insert text at the cursor, replacing the selection if any.
    ///
    /// The selection delete and the insert are recorded as two separate
    /// actions, so reverting a type-over takes two undos.
    /// Returns false when nothing changed (empty text without a selection,
    /// or the result would exceed `max_len`).
    pub fn insert(&mut self, text: &str) -> bool {
        let selected = self.selection_range().map(|r| r.len()).unwrap_or(0);
        if let Some(max) = self.max_len {
            if self.content.len() - selected + text.len() > max {
                tracing::debug!(
                    len = self.content.len(),
                    insert = text.len(),
                    max,
                    "insert rejected: buffer limit"
                );
                return false;
            }
        }

        let deleted = self.delete_selection();
        if text.is_empty() {
            return deleted;
        }

        let start = self.cursor;
        self.content.insert_str(start, text);
        self.cursor = start + text.len();
        self.selection_anchor = None;
        self.preferred_column = None;

        self.history.push(EditAction::insert(
            start,
            text.to_string(),
            start,
            self.cursor,
        ));
        true
    }

    /// Delete the code point before the cursor (Backspace)
    pub fn backspace(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor == 0 {
            return false;
        }

        let end = self.cursor;
        let start = prev_boundary(&self.content, end);
        self.remove_recorded(start, end, end, start);
        true
    }

    /// Delete the code point after the cursor (Delete key)
    pub fn delete(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor >= self.content.len() {
            return false;
        }

        let start = self.cursor;
        let end = next_boundary(&self.content, start);
        self.remove_recorded(start, end, start, start);
        true
    }

    /// Delete the active selection as one undoable action.
    /// Cursor lands at the selection start.
    pub fn delete_selection(&mut self) -> bool {
        let Some(sel) = self.selection() else {
            self.selection_anchor = None;
            return false;
        };
        self.remove_recorded(sel.start(), sel.end(), self.cursor, sel.start());
        true
    }

    /// Remove `[start, end)` and record a Delete action.
    fn remove_recorded(
        &mut self,
        start: usize,
        end: usize,
        cursor_before: usize,
        cursor_after: usize,
    ) {
        let removed: String = self.content.drain(start..end).collect();
        self.cursor = cursor_after;
        self.selection_anchor = None;
        self.preferred_column = None;
        self.history.push(EditAction::delete(
            start,
            removed,
            cursor_before,
            cursor_after,
        ));
    }

    /// Undo the last action
    pub fn undo(&mut self) -> bool {
        let Some(action) = self.history.pop_undo() else {
            return false;
        };

        match action.kind {
            EditKind::Insert => {
                self.content.replace_range(action.start..action.end, "");
            }
            EditKind::Delete => {
                self.content.insert_str(action.start, &action.text);
            }
        }
        self.cursor = floor_boundary(&self.content, action.cursor_before);
        self.selection_anchor = None;
        self.preferred_column = None;
        true
    }

    /// Redo the last undone action
    pub fn redo(&mut self) -> bool {
        let Some(action) = self.history.pop_redo() else {
            return false;
        };

        match action.kind {
            EditKind::Insert => {
                self.content.insert_str(action.start, &action.text);
            }
            EditKind::Delete => {
                self.content.replace_range(action.start..action.end, "");
            }
        }
        self.cursor = floor_boundary(&self.content, action.cursor_after);
        self.selection_anchor = None;
        self.preferred_column = None;
        true
    }

    /// Replace all content. Hard reset: cursor to end, no selection, no history.
    pub fn set_text(&mut self, text: &str) {
        self.content.clear();
        self.content.push_str(text);
        self.cursor = self.content.len();
        self.selection_anchor = None;
        self.preferred_column = None;
        self.history.clear();
    }
}
