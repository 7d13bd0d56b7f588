//! Editor model - the complete state of one command editor
//!
//! State is an explicit value owned by the caller; there are no globals.
//! Tokens and layout are derived from the buffer on demand.

use serde::Serialize;

use crate::config::EditorConfig;
use crate::editable::TextBuffer;
use crate::layout::{offset_to_visual, wrap, VisualLine, VisualPosition};
use crate::measure::TextMeasure;
use crate::syntax::{tokenize, Token};

/// Keyboard focus of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusState {
    #[default]
    Unfocused,
    Focused,
    /// Focused with a non-empty selection
    Selecting,
}

/// A command-line editor: buffer, focus and layout parameters
#[derive(Debug, Clone)]
pub struct CommandEditor {
    pub buffer: TextBuffer,
    pub config: EditorConfig,
    /// Width available for wrapping, in pixels
    max_width: f32,
    focused: bool,
}

impl CommandEditor {
    pub fn new(config: EditorConfig, max_width: f32) -> Self {
        let buffer = TextBuffer::new()
            .with_max_len(Some(config.max_command_len))
            .with_history_limit(config.history_limit);
        Self {
            buffer,
            config,
            max_width,
            focused: false,
        }
    }

    /// Create an editor holding `text` (no undo history)
    pub fn with_text(text: &str, config: EditorConfig, max_width: f32) -> Self {
        let mut editor = Self::new(config, max_width);
        editor.buffer.set_text(text);
        editor
    }

    pub fn text(&self) -> &str {
        self.buffer.get_text()
    }

    pub fn max_width(&self) -> f32 {
        self.max_width
    }

    /// Update the wrap width after a resize
    pub fn set_max_width(&mut self, max_width: f32) {
        if self.max_width != max_width {
            tracing::debug!(from = self.max_width, to = max_width, "wrap width changed");
            self.max_width = max_width;
        }
    }

    pub fn line_height(&self) -> f32 {
        self.config.line_height
    }

    pub fn tokens(&self) -> Vec<Token> {
        tokenize(self.text())
    }

    /// Tokenize and wrap the current content
    pub fn layout<M: TextMeasure + ?Sized>(&self, measure: &M) -> Vec<VisualLine> {
        let options = self.config.wrap_options(self.max_width);
        wrap(&self.tokens(), self.text(), &options, measure)
    }

    /// Where the caret is drawn
    pub fn caret_position<M: TextMeasure + ?Sized>(&self, measure: &M) -> VisualPosition {
        let lines = self.layout(measure);
        offset_to_visual(
            &lines,
            self.text(),
            self.buffer.cursor(),
            self.line_height(),
            measure,
        )
    }

    pub fn focus_state(&self) -> FocusState {
        match (self.focused, self.buffer.has_selection()) {
            (false, _) => FocusState::Unfocused,
            (true, false) => FocusState::Focused,
            (true, true) => FocusState::Selecting,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns true if focus changed
    pub fn set_focused(&mut self, focused: bool) -> bool {
        let changed = self.focused != focused;
        self.focused = focused;
        changed
    }
}

impl Default for CommandEditor {
    fn default() -> Self {
        Self::new(EditorConfig::default(), f32::INFINITY)
    }
}
