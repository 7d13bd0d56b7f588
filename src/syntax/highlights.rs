//! Theme keys for token kinds.
//!
//! The renderer looks colors up by these names; index into
//! [`HIGHLIGHT_NAMES`] is stable.

use super::tokenizer::TokenKind;

/// Theme key per token kind. Index into this array is the HighlightId.
pub const HIGHLIGHT_NAMES: &[&str] = &[
    "command",    // curl
    "flag",       // -H, --data
    "method",     // GET, POST
    "url",        // http(s)://
    "string",     // '...', "..."
    "brace",      // { } [ ]
    "data",       // any other word
    "whitespace", // spaces and tabs
    "backslash",  // line continuation
    "newline",    // \n, \r\n
    "error",      // unterminated string
];

/// Index into HIGHLIGHT_NAMES
pub type HighlightId = u16;

impl TokenKind {
    /// Stable theme key for this kind
    pub fn highlight_name(&self) -> &'static str {
        HIGHLIGHT_NAMES[self.highlight_id() as usize]
    }

    pub fn highlight_id(&self) -> HighlightId {
        match self {
            TokenKind::Command => 0,
            TokenKind::Flag => 1,
            TokenKind::Method => 2,
            TokenKind::Url => 3,
            TokenKind::String => 4,
            TokenKind::JsonBrace => 5,
            TokenKind::Data => 6,
            TokenKind::Whitespace => 7,
            TokenKind::Backslash => 8,
            TokenKind::Newline => 9,
            TokenKind::Error => 10,
        }
    }
}

/// Look up a HighlightId by theme key
pub fn highlight_id_for_name(name: &str) -> Option<HighlightId> {
    HIGHLIGHT_NAMES
        .iter()
        .position(|&n| n == name)
        .map(|i| i as HighlightId)
}
