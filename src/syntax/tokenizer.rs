//! Lexer for curl-style command lines.
//!
//! Produces contiguous, non-overlapping spans covering every byte of the
//! input. Malformed input (an unterminated quote) is flagged on the token
//! rather than reported as an error.

use serde::Serialize;

use crate::util::text::{is_blank, is_line_break};

/// Methods recognised as bare words (case-sensitive)
pub const HTTP_METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"];

/// Flags whose following quoted argument is a header
const HEADER_FLAGS: &[&str] = &["-H", "--header"];

/// Semantic class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Command,
    Flag,
    Method,
    Url,
    String,
    JsonBrace,
    Data,
    Whitespace,
    Backslash,
    Newline,
    Error,
}

/// A classified `[start, end)` byte span of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    /// Unterminated quoted string
    pub has_error: bool,
    /// String that follows a `-H`/`--header` flag
    pub header_value: bool,
}

impl Token {
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            start,
            end,
            has_error: false,
            header_value: false,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The token's text within `source`
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

/// Split `input` into tokens.
pub fn tokenize(input: &str) -> Vec<Token> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut last_flag: Option<&str> = None;
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        let byte = bytes[pos];

        let token = if is_blank(byte) {
            pos = scan_while(bytes, pos, is_blank);
            Token::new(TokenKind::Whitespace, start, pos)
        } else if is_line_break(byte) {
            pos += 1;
            if byte == b'\r' && bytes.get(pos) == Some(&b'\n') {
                pos += 1;
            }
            Token::new(TokenKind::Newline, start, pos)
        } else if byte == b'\\' {
            pos += 1;
            Token::new(TokenKind::Backslash, start, pos)
        } else if byte == b'"' || byte == b'\'' {
            let (end, terminated) = scan_quoted(input, pos);
            pos = end;
            let mut token = Token::new(TokenKind::String, start, pos);
            token.has_error = !terminated;
            token.header_value = last_flag.is_some_and(|flag| HEADER_FLAGS.contains(&flag));
            token
        } else if byte == b'-' && (start == 0 || is_flag_boundary(bytes[start - 1])) {
            pos = scan_while(bytes, pos + 1, |b| {
                !is_blank(b) && !is_line_break(b) && b != b'='
            });
            last_flag = Some(&input[start..pos]);
            Token::new(TokenKind::Flag, start, pos)
        } else if matches!(byte, b'{' | b'}' | b'[' | b']') {
            pos += 1;
            Token::new(TokenKind::JsonBrace, start, pos)
        } else {
            pos = scan_while(bytes, pos, is_word_byte);
            Token::new(classify_word(&input[start..pos], start), start, pos)
        };

        tokens.push(token);
    }

    tokens
}

/// Whitespace that may precede a flag
fn is_flag_boundary(byte: u8) -> bool {
    is_blank(byte) || is_line_break(byte)
}

fn is_word_byte(byte: u8) -> bool {
    !is_blank(byte) && !is_line_break(byte) && !matches!(byte, b'"' | b'\'' | b'\\')
}

fn scan_while(bytes: &[u8], mut pos: usize, pred: impl Fn(u8) -> bool) -> usize {
    while pos < bytes.len() && pred(bytes[pos]) {
        pos += 1;
    }
    pos
}

/// Scan a quoted string starting at the opening quote.
///
/// Returns the end offset and whether the closing quote was found. A raw
/// line break ends the string unterminated, and is not part of it.
fn scan_quoted(input: &str, open: usize) -> (usize, bool) {
    let bytes = input.as_bytes();
    let quote = bytes[open];
    let mut pos = open + 1;

    while pos < bytes.len() {
        let byte = bytes[pos];
        if byte == quote {
            return (pos + 1, true);
        }
        if is_line_break(byte) {
            return (pos, false);
        }
        if byte == b'\\' {
            // `\X` never terminates the string; X is a whole code point but
            // never a line break.
            match input[pos + 1..].chars().next() {
                Some(escaped) if !is_line_break_char(escaped) => {
                    pos += 1 + escaped.len_utf8();
                }
                _ => pos += 1,
            }
            continue;
        }
        pos += utf8_len(byte);
    }

    (bytes.len(), false)
}

fn is_line_break_char(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

/// Byte length of the code point starting with `lead`
fn utf8_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    }
}

fn classify_word(word: &str, start: usize) -> TokenKind {
    if start == 0 && word == "curl" {
        TokenKind::Command
    } else if HTTP_METHODS.contains(&word) {
        TokenKind::Method
    } else if word.starts_with("http://") || word.starts_with("https://") {
        TokenKind::Url
    } else {
        TokenKind::Data
    }
}
