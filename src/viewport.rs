//! Horizontal viewport for a fixed-width entry box.
//!
//! Owns the pixel offset applied when rendering so the caret always lands
//! inside `[0, width]`. The policy shifts by the minimal amount: no
//! scrolling happens while the caret is already inside the box.

/// Horizontal scroll state, in pixels.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    width: f32,
    x_offset: f32,
}

impl Viewport {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            x_offset: 0.0,
        }
    }

    /// Visible box width in pixels
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Current pixel shift; the renderer applies this as a pure
    /// translation
    pub fn x_offset(&self) -> f32 {
        self.x_offset
    }

    /// Change the box width. The caller is expected to follow up with
    /// [`Viewport::refresh`] so the caret stays visible.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Recompute the offset for the given caret position and total text
    /// width (both unshifted, in pixels).
    ///
    /// - caret past the right edge: shift left just enough to put the
    ///   caret on the right edge
    /// - caret past the left edge: shift right just enough to put the
    ///   caret on the left edge
    /// - otherwise leave the offset alone
    ///
    /// When the whole text fits in the box the offset relaxes to 0, so a
    /// shrinking buffer never leaves the view stuck scrolled.
    pub fn refresh(&mut self, caret_px: f32, total_px: f32) {
        if total_px <= self.width {
            self.x_offset = 0.0;
        } else if self.x_offset > total_px - self.width {
            self.x_offset = total_px - self.width;
        }

        if caret_px - self.x_offset > self.width {
            self.x_offset = caret_px - self.width;
        } else if caret_px - self.x_offset < 0.0 {
            self.x_offset = caret_px;
        }
    }

    /// Reset the offset to 0 (buffer cleared)
    pub fn reset(&mut self) {
        self.x_offset = 0.0;
    }
}
