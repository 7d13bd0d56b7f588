//! Soft wrapping of a token stream into visual lines.
//!
//! Tokens wider than the remaining space are split mid-token at code point
//! boundaries: URLs and JSON bodies often have no whitespace to break at.
//! Every byte of the input ends up in exactly one fragment.

use serde::Serialize;

use crate::measure::TextMeasure;
use crate::syntax::{Token, TokenKind};
use crate::util::text::next_boundary;

/// Wrapping parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapOptions {
    /// Available width in pixels
    pub max_width: f32,
    /// Indent, in columns, of lines produced by wrapping
    pub continuation_indent: usize,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            max_width: f32::INFINITY,
            continuation_indent: 2,
        }
    }
}

/// A whole token or a piece of one, placed on a visual line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualToken {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub has_error: bool,
    pub header_value: bool,
    /// Measured width in pixels (0 for newlines and collapsed whitespace)
    pub width: f32,
    /// Leading whitespace of a line after the first, kept but not rendered
    pub collapsed: bool,
}

impl VisualToken {
    fn piece(token: &Token, start: usize, end: usize, width: f32, collapsed: bool) -> Self {
        Self {
            kind: token.kind,
            start,
            end,
            has_error: token.has_error,
            header_value: token.header_value,
            width,
            collapsed,
        }
    }

    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    /// Kind the renderer should color by
    pub fn display_kind(&self) -> TokenKind {
        if self.has_error {
            TokenKind::Error
        } else {
            self.kind
        }
    }
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualLine {
    pub tokens: Vec<VisualToken>,
    /// Leading indent in columns
    pub indent: usize,
    /// Leading indent in pixels
    pub indent_width: f32,
    /// Produced by wrapping rather than by an explicit line break
    pub continuation: bool,
    /// Byte range covered by this line
    pub start: usize,
    pub end: usize,
}

impl VisualLine {
    fn empty(start: usize, indent: usize, indent_width: f32, continuation: bool) -> Self {
        Self {
            tokens: Vec::new(),
            indent,
            indent_width,
            continuation,
            start,
            end: start,
        }
    }

    /// Rendered width including the indent
    pub fn width(&self) -> f32 {
        self.indent_width + self.tokens.iter().map(|t| t.width).sum::<f32>()
    }

    /// True when the line holds something other than collapsed whitespace
    pub fn has_content(&self) -> bool {
        self.tokens.iter().any(|t| !t.collapsed)
    }

    /// True when the line ends with an explicit line break
    pub fn ends_with_newline(&self) -> bool {
        self.tokens
            .last()
            .is_some_and(|t| t.kind == TokenKind::Newline)
    }
}

/// Lay `tokens` (produced from `text`) out into visual lines.
///
/// Always returns at least one line.
pub fn wrap<M: TextMeasure + ?Sized>(
    tokens: &[Token],
    text: &str,
    options: &WrapOptions,
    measure: &M,
) -> Vec<VisualLine> {
    let mut wrapper = LineWrapper::new(text, options, measure);
    for token in tokens {
        if token.kind == TokenKind::Newline {
            wrapper.push(token, token.start, token.end, 0.0, false);
            wrapper.break_line(token.end, false);
        } else {
            wrapper.place(token);
        }
    }
    let lines = wrapper.finish();
    tracing::trace!(
        tokens = tokens.len(),
        lines = lines.len(),
        max_width = options.max_width,
        "wrapped"
    );
    lines
}

struct LineWrapper<'a, M: ?Sized> {
    text: &'a str,
    max_width: f32,
    continuation_indent: usize,
    continuation_indent_width: f32,
    measure: &'a M,
    lines: Vec<VisualLine>,
    current: VisualLine,
    used: f32,
}

impl<'a, M: TextMeasure + ?Sized> LineWrapper<'a, M> {
    fn new(text: &'a str, options: &WrapOptions, measure: &'a M) -> Self {
        let indent = " ".repeat(options.continuation_indent);
        Self {
            text,
            max_width: options.max_width,
            continuation_indent: options.continuation_indent,
            continuation_indent_width: measure.measure(&indent),
            measure,
            lines: Vec::new(),
            current: VisualLine::empty(0, 0, 0.0, false),
            used: 0.0,
        }
    }

    fn push(&mut self, token: &Token, start: usize, end: usize, width: f32, collapsed: bool) {
        self.current
            .tokens
            .push(VisualToken::piece(token, start, end, width, collapsed));
        self.current.end = end;
        self.used += width;
    }

    /// Close the current line and open a new one starting at `at`.
    fn break_line(&mut self, at: usize, continuation: bool) {
        let next = if continuation {
            VisualLine::empty(
                at,
                self.continuation_indent,
                self.continuation_indent_width,
                true,
            )
        } else {
            VisualLine::empty(at, 0, 0.0, false)
        };
        self.used = next.indent_width;
        let done = std::mem::replace(&mut self.current, next);
        self.lines.push(done);
    }

    /// Place a non-newline token, splitting it across lines as needed.
    fn place(&mut self, token: &Token) {
        let mut start = token.start;

        while start < token.end {
            if token.kind == TokenKind::Whitespace && self.at_new_line_start() {
                self.push(token, start, token.end, 0.0, true);
                return;
            }

            let available = self.max_width - self.used;
            let (mut split, mut width) = self.fitting_prefix(start, token.end, available);
            if split == start {
                if self.current.has_content() {
                    self.break_line(start, true);
                    continue;
                }
                // Nothing fits on an empty line: place one code point anyway
                split = next_boundary(self.text, start);
                width = self.measure.measure(&self.text[start..split]);
            }

            self.push(token, start, split, width, false);
            if split < token.end {
                self.break_line(split, true);
            }
            start = split;
        }
    }

    /// A line opened by a break that holds nothing visible yet.
    fn at_new_line_start(&self) -> bool {
        !self.lines.is_empty() && !self.current.has_content()
    }

    /// Longest prefix of `text[start..end]` ending on a code point boundary
    /// that fits in `available`, with its width. `(start, 0.0)` if none does.
    ///
    /// Gallops over the prefix length, then bisects the last step. Only
    /// prefixes up to about twice the fitting length are ever measured.
    fn fitting_prefix(&self, start: usize, end: usize, available: f32) -> (usize, f32) {
        let mut ends = self.text[start..end]
            .char_indices()
            .skip(1)
            .map(|(i, _)| start + i)
            .chain(std::iter::once(end));
        // boundaries[k - 1] ends the prefix of k code points
        let mut boundaries: Vec<usize> = Vec::new();
        let fits = |b: usize| {
            let width = self.measure.measure(&self.text[start..b]);
            (width <= available).then_some(width)
        };

        let (mut fit, mut fit_width) = (0, 0.0);
        let mut step = 1;
        let mut over = None;
        loop {
            let want = fit + step;
            while boundaries.len() < want {
                match ends.next() {
                    Some(b) => boundaries.push(b),
                    None => break,
                }
            }
            let probe = want.min(boundaries.len());
            if probe == fit {
                break;
            }
            match fits(boundaries[probe - 1]) {
                Some(width) => {
                    fit = probe;
                    fit_width = width;
                    step *= 2;
                }
                None => {
                    over = Some(probe);
                    break;
                }
            }
        }

        if let Some(mut over) = over {
            while over - fit > 1 {
                let mid = (fit + over) / 2;
                match fits(boundaries[mid - 1]) {
                    Some(width) => {
                        fit = mid;
                        fit_width = width;
                    }
                    None => over = mid,
                }
            }
        }

        if fit == 0 {
            (start, 0.0)
        } else {
            (boundaries[fit - 1], fit_width)
        }
    }

    fn finish(mut self) -> Vec<VisualLine> {
        self.lines.push(self.current);
        self.lines
    }
}
