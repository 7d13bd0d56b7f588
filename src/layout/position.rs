//! Mapping between buffer offsets and on-screen positions.

use serde::Serialize;

use super::wrap::{VisualLine, VisualToken};
use crate::editable::TextBuffer;
use crate::measure::TextMeasure;
use crate::syntax::TokenKind;
use crate::util::text::floor_boundary;

/// Caret location in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualPosition {
    /// Visual line index
    pub line: usize,
    /// Pixels from the left edge, including the line's indent
    pub x: f32,
    /// Top of the line in pixels
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalDirection {
    Up,
    Down,
}

/// Locate `offset` in the laid-out lines.
///
/// Fragment ends are inclusive, so an offset on a boundary between two
/// fragments resolves to the end of the earlier one. Newline fragments
/// exclude their end, which belongs to the next line; an offset inside a
/// CRLF pair sits before the break.
pub fn offset_to_visual<M: TextMeasure + ?Sized>(
    lines: &[VisualLine],
    text: &str,
    offset: usize,
    line_height: f32,
    measure: &M,
) -> VisualPosition {
    let offset = floor_boundary(text, offset);

    for (index, line) in lines.iter().enumerate() {
        let y = index as f32 * line_height;
        if line.tokens.is_empty() {
            if offset == line.start {
                return VisualPosition {
                    line: index,
                    x: line.indent_width,
                    y,
                };
            }
            continue;
        }

        let mut x = line.indent_width;
        for fragment in &line.tokens {
            if fragment_contains(fragment, offset) {
                if !fragment.collapsed
                    && fragment.kind != TokenKind::Newline
                    && offset > fragment.start
                {
                    x += measure.measure(&text[fragment.start..offset]);
                }
                return VisualPosition { line: index, x, y };
            }
            x += fragment.width;
        }
    }

    // Past the end: after the last fragment of the last line
    match lines.last() {
        Some(last) => VisualPosition {
            line: lines.len() - 1,
            x: last.width(),
            y: (lines.len() - 1) as f32 * line_height,
        },
        None => VisualPosition {
            line: 0,
            x: 0.0,
            y: 0.0,
        },
    }
}

fn fragment_contains(fragment: &VisualToken, offset: usize) -> bool {
    if fragment.kind == TokenKind::Newline {
        fragment.start <= offset && offset < fragment.end
    } else {
        fragment.start <= offset && offset <= fragment.end
    }
}

/// Hit-test a point against the laid-out lines.
pub fn visual_to_offset<M: TextMeasure + ?Sized>(
    lines: &[VisualLine],
    text: &str,
    x: f32,
    y: f32,
    line_height: f32,
    measure: &M,
) -> usize {
    let Some(last) = lines.len().checked_sub(1) else {
        return 0;
    };
    // NaN and negatives land on line 0
    let index = ((y / line_height).floor().max(0.0) as usize).min(last);
    let line = &lines[index];

    let Some(first) = line.tokens.first() else {
        return line.start;
    };
    if x <= line.indent_width {
        return first.start;
    }

    let mut left = line.indent_width;
    let mut content_end = line.start;
    for fragment in &line.tokens {
        if fragment.kind == TokenKind::Newline {
            return fragment.start;
        }
        if x < left + fragment.width {
            return hit_in_fragment(text, fragment, x - left, measure);
        }
        left += fragment.width;
        content_end = fragment.end;
    }
    content_end
}

/// Boundary inside `fragment` whose character center is nearest `local_x`.
fn hit_in_fragment<M: TextMeasure + ?Sized>(
    text: &str,
    fragment: &VisualToken,
    local_x: f32,
    measure: &M,
) -> usize {
    let mut buf = [0u8; 4];
    let mut char_left = 0.0;
    for (i, ch) in text[fragment.start..fragment.end].char_indices() {
        let width = measure.measure(ch.encode_utf8(&mut buf));
        if local_x < char_left + width / 2.0 {
            return fragment.start + i;
        }
        char_left += width;
    }
    fragment.end
}

/// Move the cursor one visual line up or down, keeping the preferred column.
pub fn move_vertical<M: TextMeasure + ?Sized>(
    buffer: &mut TextBuffer,
    lines: &[VisualLine],
    direction: VerticalDirection,
    extend_selection: bool,
    line_height: f32,
    measure: &M,
) {
    let text = buffer.get_text();
    let current = offset_to_visual(lines, text, buffer.cursor(), line_height, measure);
    let preferred = buffer.preferred_column().unwrap_or(current.x);

    let target_y = match direction {
        VerticalDirection::Up => current.y - line_height,
        VerticalDirection::Down => current.y + line_height,
    };
    // Probe the middle of the target band so float error cannot pick a neighbour
    let offset = visual_to_offset(
        lines,
        text,
        preferred,
        target_y + line_height / 2.0,
        line_height,
        measure,
    );

    buffer.place_cursor_vertically(offset, preferred, extend_selection);
}
