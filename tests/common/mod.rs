//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use reqline::config::EditorConfig;
use reqline::editable::TextEditMsg;
use reqline::layout::VisualLine;
use reqline::measure::Monospace;
use reqline::model::CommandEditor;
use reqline::update::update;

/// Line height used by test editors
pub const LINE_HEIGHT: f32 = 20.0;

/// Create a wide (effectively unwrapped) editor with the cursor at `cursor`
pub fn test_editor(text: &str, cursor: usize) -> CommandEditor {
    let mut editor = narrow_editor(text, 1000.0);
    editor.buffer.set_cursor(cursor, false);
    editor
}

/// Create an editor with a selection from `anchor` to `head` (cursor at head)
pub fn test_editor_with_selection(text: &str, anchor: usize, head: usize) -> CommandEditor {
    let mut editor = test_editor(text, head);
    editor.buffer.set_selection(anchor, head);
    editor
}

/// Create an editor that wraps at `max_width` monospace columns
pub fn narrow_editor(text: &str, max_width: f32) -> CommandEditor {
    let config = EditorConfig {
        line_height: LINE_HEIGHT,
        continuation_indent: 2,
        ..Default::default()
    };
    CommandEditor::with_text(text, config, max_width)
}

/// Dispatch a message with one-unit-per-character measurement
pub fn send(editor: &mut CommandEditor, msg: TextEditMsg) -> bool {
    update(editor, msg, &Monospace::default())
}

/// Type a string one code point at a time
pub fn type_text(editor: &mut CommandEditor, text: &str) {
    for ch in text.chars() {
        send(editor, TextEditMsg::Insert(ch.to_string()));
    }
}

/// Rendered text of each visual line (collapsed fragments included)
pub fn line_texts(lines: &[VisualLine], text: &str) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.tokens.iter().map(|t| t.text(text)).collect())
        .collect()
}

/// Assert every byte of `text` is in exactly one fragment, in order
pub fn assert_layout_covers(lines: &[VisualLine], text: &str) {
    let mut expected = 0;
    for line in lines {
        for fragment in &line.tokens {
            assert_eq!(
                fragment.start, expected,
                "gap or overlap at {} in {:?}",
                expected, text
            );
            assert!(fragment.end > fragment.start, "empty fragment in {:?}", text);
            assert!(text.is_char_boundary(fragment.start));
            assert!(text.is_char_boundary(fragment.end));
            expected = fragment.end;
        }
    }
    assert_eq!(expected, text.len(), "layout does not reach end of {:?}", text);
}

/// Small deterministic generator for randomized sequences
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    /// Uniform-ish value in `0..bound`
    pub fn below(&mut self, bound: usize) -> usize {
        self.next_u32() as usize % bound.max(1)
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }
}
