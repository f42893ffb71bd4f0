//! Width measurement collaborator.
//!
//! The viewport only needs one thing from the rendering stack: the pixel
//! width of a string prefix under the active font and character size.
//! [`FontMeasure`] provides that over a fontdue font; [`FixedAdvance`] is
//! the monospace degenerate case, used by tests and terminal-like hosts.

use anyhow::{anyhow, Result};
use fontdue::{Font, FontSettings};

/// Measures the pixel width of a string.
///
/// Implementations must be monotonic non-decreasing in string length for
/// the viewport's shift logic to converge.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> f32;
}

/// Fixed per-character advance (monospace).
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvance {
    pub advance: f32,
}

impl FixedAdvance {
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl TextMeasure for FixedAdvance {
    fn measure(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }
}

/// Proportional measurement backed by a fontdue font: the sum of glyph
/// advance widths at the configured character size.
pub struct FontMeasure {
    font: Font,
    char_size: f32,
}

impl FontMeasure {
    /// Load a font from raw TTF/OTF bytes.
    pub fn from_bytes(data: &[u8], char_size: f32) -> Result<Self> {
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|e| anyhow!("failed to load font: {e}"))?;
        Ok(Self { font, char_size })
    }

    pub fn char_size(&self) -> f32 {
        self.char_size
    }

    pub fn set_char_size(&mut self, char_size: f32) {
        self.char_size = char_size;
    }
}

impl TextMeasure for FontMeasure {
    fn measure(&self, text: &str) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, self.char_size).advance_width)
            .sum()
    }
}
