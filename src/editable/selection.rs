//! Selection type for the command buffer.

use std::ops::Range;

/// A text selection with anchor (start point) and head (cursor position).
/// The anchor stays fixed while the head moves during selection extension.
/// Both ends are byte offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: usize,
    /// Where the cursor is (moving point)
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Check if selection is empty (anchor == head)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Get the start offset (minimum of anchor and head)
    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    /// Get the end offset (maximum of anchor and head)
    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// Half-open byte range covered by the selection
    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }
}
