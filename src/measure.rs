//! Text measurement.
//!
//! Layout never looks at glyphs; it only asks "how wide is this fragment?".
//! The renderer supplies the answer through [`TextMeasure`]. Implementations
//! must be deterministic and must not cache across font or size changes.

use std::path::Path;

use anyhow::{Context, Result};
use fontdue::{Font, FontSettings};

/// Width of a text fragment in pixels.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> f32;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> f32,
{
    fn measure(&self, text: &str) -> f32 {
        self(text)
    }
}

/// Fixed advance per code point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Monospace {
    pub char_width: f32,
}

impl Monospace {
    pub fn new(char_width: f32) -> Self {
        Self { char_width }
    }
}

impl Default for Monospace {
    fn default() -> Self {
        Self { char_width: 1.0 }
    }
}

impl TextMeasure for Monospace {
    fn measure(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }
}

/// Proportional measurement from a font's advance widths.
pub struct FontMeasure {
    font: Font,
    font_size: f32,
}

impl FontMeasure {
    /// Parse a TTF/OTF font from memory
    pub fn from_bytes(bytes: &[u8], font_size: f32) -> Result<Self> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| anyhow::anyhow!("failed to parse font: {}", e))?;
        Ok(Self { font, font_size })
    }

    /// Load a TTF/OTF font from disk
    pub fn from_file(path: &Path, font_size: f32) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("failed to read font {}", path.display()))?;
        Self::from_bytes(&bytes, font_size)
            .with_context(|| format!("failed to load font {}", path.display()))
    }
}

impl TextMeasure for FontMeasure {
    fn measure(&self, text: &str) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, self.font_size).advance_width)
            .sum()
    }
}
