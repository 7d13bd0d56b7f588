//! Utility functions for text editing
//!
//! All offsets here are byte offsets into UTF-8 text. Every function returns
//! offsets that land on a code point boundary.

/// Character type for word navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharType {
    /// Whitespace characters (including line breaks)
    Whitespace,
    /// Anything else
    WordChar,
}

/// Get the character type for word navigation
pub fn char_type(ch: char) -> CharType {
    if ch.is_whitespace() {
        CharType::Whitespace
    } else {
        CharType::WordChar
    }
}

/// Space or tab, the only characters that form a Whitespace token
#[inline]
pub fn is_blank(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

/// `\n` or `\r`
#[inline]
pub fn is_line_break(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

/// Clamp `offset` to `text.len()` and snap it down to the nearest code point boundary.
pub fn floor_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while offset > 0 && !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Offset of the code point boundary before `offset` (0 stays 0).
pub fn prev_boundary(text: &str, offset: usize) -> usize {
    let offset = floor_boundary(text, offset);
    text[..offset]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Offset of the code point boundary after `offset` (`len` stays `len`).
pub fn next_boundary(text: &str, offset: usize) -> usize {
    let offset = floor_boundary(text, offset);
    text[offset..]
        .chars()
        .next()
        .map(|ch| offset + ch.len_utf8())
        .unwrap_or(offset)
}

/// Word jump to the left: skip whitespace, then skip non-whitespace.
pub fn word_start_before(text: &str, offset: usize) -> usize {
    let mut pos = floor_boundary(text, offset);
    let mut chars = text[..pos].chars().rev().peekable();

    while let Some(&ch) = chars.peek() {
        if char_type(ch) != CharType::Whitespace {
            break;
        }
        pos -= ch.len_utf8();
        chars.next();
    }
    while let Some(&ch) = chars.peek() {
        if char_type(ch) == CharType::Whitespace {
            break;
        }
        pos -= ch.len_utf8();
        chars.next();
    }
    pos
}

/// Word jump to the right: skip non-whitespace, then skip whitespace.
pub fn word_end_after(text: &str, offset: usize) -> usize {
    let mut pos = floor_boundary(text, offset);
    let mut chars = text[pos..].chars().peekable();

    while let Some(&ch) = chars.peek() {
        if char_type(ch) == CharType::Whitespace {
            break;
        }
        pos += ch.len_utf8();
        chars.next();
    }
    while let Some(&ch) = chars.peek() {
        if char_type(ch) != CharType::Whitespace {
            break;
        }
        pos += ch.len_utf8();
        chars.next();
    }
    pos
}

/// True when `offset` falls between the `\r` and `\n` of a CRLF pair.
fn inside_crlf(text: &str, offset: usize) -> bool {
    let bytes = text.as_bytes();
    offset > 0 && bytes[offset - 1] == b'\r' && bytes.get(offset) == Some(&b'\n')
}

/// Offset just after the nearest line break before `offset`, or 0.
///
/// The inside of a CRLF pair belongs to the line the pair ends.
pub fn line_start(text: &str, offset: usize) -> usize {
    let mut offset = floor_boundary(text, offset);
    if inside_crlf(text, offset) {
        offset -= 1;
    }
    text.as_bytes()[..offset]
        .iter()
        .rposition(|&b| is_line_break(b))
        .map(|i| i + 1)
        .unwrap_or(0)
}

/// Offset of the nearest line break at or after `offset`, or `len`.
pub fn line_end(text: &str, offset: usize) -> usize {
    let offset = floor_boundary(text, offset);
    if inside_crlf(text, offset) {
        return offset - 1;
    }
    text.as_bytes()[offset..]
        .iter()
        .position(|&b| is_line_break(b))
        .map(|i| offset + i)
        .unwrap_or(text.len())
}
